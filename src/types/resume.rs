// src/types/resume.rs
//! Resume document structures. Every field is optional: absent sections are
//! skipped at layout time rather than rendered as placeholders.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    pub basics: Basics,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    /// Category → skill names. Insertion order is the rendering order.
    pub skills: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Basics {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    /// Legacy resume exports stored the school under `role`.
    #[serde(alias = "role")]
    pub school: Option<String>,
    /// Legacy resume exports stored the degree under `company`.
    #[serde(alias = "company")]
    pub degree: Option<String>,
    pub location: Option<String>,
    pub dates: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub role: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub dates: Option<String>,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: Option<String>,
    pub dates: Option<String>,
    pub bullets: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_a_valid_resume() {
        let resume: ResumeDocument = serde_json::from_str("{}").expect("empty resume");
        assert!(resume.basics.name.is_none());
        assert!(resume.education.is_empty());
        assert!(resume.skills.is_empty());
    }

    #[test]
    fn test_education_accepts_legacy_field_names() {
        let json = r#"{"role": "MIT", "company": "BSc Computer Science", "dates": "2018-2022"}"#;
        let ed: Education = serde_json::from_str(json).expect("legacy education");
        assert_eq!(ed.school.as_deref(), Some("MIT"));
        assert_eq!(ed.degree.as_deref(), Some("BSc Computer Science"));
    }

    #[test]
    fn test_education_prefers_first_class_field_names() {
        let json = r#"{"school": "MIT", "degree": "BSc", "location": "Cambridge, MA"}"#;
        let ed: Education = serde_json::from_str(json).expect("education");
        assert_eq!(ed.school.as_deref(), Some("MIT"));
        assert_eq!(ed.degree.as_deref(), Some("BSc"));
    }

    #[test]
    fn test_skills_preserve_source_order() {
        let json = r#"{"skills": {"Zebra": ["a"], "Alpha": ["b"], "Mango": ["c"]}}"#;
        let resume: ResumeDocument = serde_json::from_str(json).expect("resume");
        let categories: Vec<&String> = resume.skills.keys().collect();
        assert_eq!(categories, ["Zebra", "Alpha", "Mango"]);
    }
}
