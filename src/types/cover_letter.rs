// src/types/cover_letter.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverLetterDocument {
    pub applicant: Applicant,
    pub document: Letter,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Applicant {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Letter {
    pub recipient: Recipient,
    #[serde(default)]
    pub body: Vec<String>,
    #[serde(default)]
    pub closing: Option<Closing>,
}

/// Addressee of the letter; `title` feeds the "Dear {title}," greeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Closing {
    pub signature: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_cover_letter_decodes() {
        let json = r#"{
            "applicant": {"name": "Jane Doe"},
            "document": {
                "recipient": {"title": "Hiring Manager"},
                "body": ["I am writing to apply."]
            }
        }"#;
        let letter: CoverLetterDocument = serde_json::from_str(json).expect("cover letter");
        assert_eq!(letter.applicant.name, "Jane Doe");
        assert_eq!(letter.document.recipient.title, "Hiring Manager");
        assert_eq!(letter.document.body.len(), 1);
        assert!(letter.document.closing.is_none());
    }
}
