// src/layout/mod.rs
//! Maps loaded documents onto an ordered sequence of visual blocks. The
//! renderer consumes the sequence as-is; nothing here knows about pages.

pub mod cover_letter;
pub mod resume;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Semantic text roles; the renderer maps each to a concrete font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    /// Resume headline name, large and centered.
    Name,
    /// Grey italic contact line under the name.
    Contact,
    /// Cover letter header line.
    Header,
    /// Cover letter applicant name.
    HeaderName,
    /// Resume body text.
    Body,
    /// Cover letter body paragraph.
    LetterBody,
    /// Cover letter sign-off.
    Closing,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Text {
        content: String,
        role: TextRole,
        align: Align,
    },
    /// Two-column row with a right-aligned date cell. Primary rows are bold
    /// (role/school line), secondary rows are italic meta (company/degree).
    RoleDateRow {
        left: String,
        right: String,
        primary: bool,
    },
    BulletList {
        items: Vec<String>,
    },
    /// Bold "label:" followed by comma-joined values (the skills motif).
    LabeledLine {
        label: String,
        values: Vec<String>,
    },
    SectionHeading(String),
    /// Vertical gap measured in lines.
    Gap(f64),
}

impl Block {
    pub fn text(content: impl Into<String>, role: TextRole, align: Align) -> Self {
        Block::Text {
            content: content.into(),
            role,
            align,
        }
    }

    pub fn row(left: Option<&str>, right: Option<&str>, primary: bool) -> Self {
        Block::RoleDateRow {
            left: left.unwrap_or_default().to_string(),
            right: right.unwrap_or_default().to_string(),
            primary,
        }
    }
}

/// Join the present, non-blank parts with " | ".
pub(crate) fn join_present(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .filter_map(|p| *p)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Drop empty and whitespace-only entries.
pub(crate) fn clean_items(items: &[String]) -> Vec<String> {
    items
        .iter()
        .filter(|item| !item.trim().is_empty())
        .cloned()
        .collect()
}

pub(crate) fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_present_skips_absent_and_blank_parts() {
        let joined = join_present(&[
            Some("jane@example.com"),
            None,
            Some("  "),
            Some("github.com/jane"),
        ]);
        assert_eq!(joined, "jane@example.com | github.com/jane");
    }

    #[test]
    fn test_join_present_empty_when_nothing_present() {
        assert_eq!(join_present(&[None, None]), "");
    }

    #[test]
    fn test_clean_items_drops_whitespace_only_entries() {
        let items = vec![
            "Shipped the thing".to_string(),
            "".to_string(),
            "   ".to_string(),
            "\t".to_string(),
        ];
        assert_eq!(clean_items(&items), ["Shipped the thing"]);
    }
}
