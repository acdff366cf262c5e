// src/layout/resume.rs
use super::{clean_items, is_blank, join_present, Align, Block, TextRole};
use crate::types::ResumeDocument;

/// Fixed section order: Header → Education → Experience → Projects → Skills.
/// A section whose source data is absent emits nothing, heading included.
pub fn build_story(resume: &ResumeDocument) -> Vec<Block> {
    let mut story = Vec::new();

    push_header(&mut story, resume);
    push_education(&mut story, resume);
    push_experience(&mut story, resume);
    push_projects(&mut story, resume);
    push_skills(&mut story, resume);

    story
}

fn push_section_heading(story: &mut Vec<Block>, title: &str) {
    story.push(Block::Gap(0.5));
    story.push(Block::SectionHeading(title.to_string()));
}

fn push_header(story: &mut Vec<Block>, resume: &ResumeDocument) {
    let basics = &resume.basics;

    if !is_blank(&basics.name) {
        story.push(Block::text(
            basics.name.as_deref().unwrap_or_default().trim(),
            TextRole::Name,
            Align::Center,
        ));
    }

    let contact = join_present(&[
        basics.email.as_deref(),
        basics.phone.as_deref(),
        basics.linkedin.as_deref(),
        basics.github.as_deref(),
    ]);
    if !contact.is_empty() {
        story.push(Block::text(contact, TextRole::Contact, Align::Center));
    }
    if !is_blank(&basics.status) {
        story.push(Block::text(
            basics.status.as_deref().unwrap_or_default().trim(),
            TextRole::Contact,
            Align::Center,
        ));
    }
}

fn push_education(story: &mut Vec<Block>, resume: &ResumeDocument) {
    if resume.education.is_empty() {
        return;
    }
    push_section_heading(story, "Education");
    for ed in &resume.education {
        story.push(Block::row(ed.school.as_deref(), ed.dates.as_deref(), true));
        story.push(Block::row(
            ed.degree.as_deref(),
            ed.location.as_deref(),
            false,
        ));
        story.push(Block::Gap(0.25));
    }
}

fn push_experience(story: &mut Vec<Block>, resume: &ResumeDocument) {
    if resume.experience.is_empty() {
        return;
    }
    push_section_heading(story, "Experience");
    for exp in &resume.experience {
        story.push(Block::row(exp.role.as_deref(), exp.dates.as_deref(), true));
        story.push(Block::row(
            exp.company.as_deref(),
            exp.location.as_deref(),
            false,
        ));

        let bullets = clean_items(&exp.bullets);
        if !bullets.is_empty() {
            story.push(Block::BulletList { items: bullets });
        }
        story.push(Block::Gap(0.25));
    }
}

fn push_projects(story: &mut Vec<Block>, resume: &ResumeDocument) {
    if resume.projects.is_empty() {
        return;
    }
    push_section_heading(story, "Projects");
    for project in &resume.projects {
        story.push(Block::row(
            project.title.as_deref(),
            project.dates.as_deref(),
            true,
        ));

        let bullets = clean_items(&project.bullets);
        if !bullets.is_empty() {
            story.push(Block::BulletList { items: bullets });
        }
        story.push(Block::Gap(0.25));
    }
}

fn push_skills(story: &mut Vec<Block>, resume: &ResumeDocument) {
    if resume.skills.is_empty() {
        return;
    }
    push_section_heading(story, "Technical Skills");
    for (category, values) in &resume.skills {
        story.push(Block::LabeledLine {
            label: category.clone(),
            values: clean_items(values),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Basics, Experience};
    use indexmap::IndexMap;

    fn headings(story: &[Block]) -> Vec<&str> {
        story
            .iter()
            .filter_map(|b| match b {
                Block::SectionHeading(title) => Some(title.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_empty_resume_has_no_section_headings() {
        let story = build_story(&ResumeDocument::default());
        assert!(headings(&story).is_empty());
        assert!(story.is_empty());
    }

    #[test]
    fn test_absent_sections_emit_no_headings() {
        let resume = ResumeDocument {
            basics: Basics {
                name: Some("Jane Doe".to_string()),
                ..Basics::default()
            },
            experience: vec![Experience {
                role: Some("Engineer".to_string()),
                company: Some("Acme".to_string()),
                dates: Some("2020-2024".to_string()),
                ..Experience::default()
            }],
            ..ResumeDocument::default()
        };
        let story = build_story(&resume);
        assert_eq!(headings(&story), ["Experience"]);
    }

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let mut skills = IndexMap::new();
        skills.insert("Programming".to_string(), vec!["Rust".to_string()]);
        let resume = ResumeDocument {
            education: vec![Default::default()],
            experience: vec![Default::default()],
            projects: vec![Default::default()],
            skills,
            ..ResumeDocument::default()
        };
        let story = build_story(&resume);
        assert_eq!(
            headings(&story),
            ["Education", "Experience", "Projects", "Technical Skills"]
        );
    }

    #[test]
    fn test_header_renders_name_contact_and_status() {
        let resume = ResumeDocument {
            basics: Basics {
                name: Some("Jane Doe".to_string()),
                email: Some("jane@example.com".to_string()),
                github: Some("github.com/jane".to_string()),
                status: Some("Open to relocation".to_string()),
                ..Basics::default()
            },
            ..ResumeDocument::default()
        };
        let story = build_story(&resume);
        assert_eq!(
            story[0],
            Block::text("Jane Doe", TextRole::Name, Align::Center)
        );
        assert_eq!(
            story[1],
            Block::text(
                "jane@example.com | github.com/jane",
                TextRole::Contact,
                Align::Center
            )
        );
        assert_eq!(
            story[2],
            Block::text("Open to relocation", TextRole::Contact, Align::Center)
        );
    }

    #[test]
    fn test_whitespace_bullets_never_produce_a_bullet_list() {
        let resume = ResumeDocument {
            experience: vec![Experience {
                role: Some("Engineer".to_string()),
                bullets: vec!["".to_string(), "   ".to_string()],
                ..Experience::default()
            }],
            ..ResumeDocument::default()
        };
        let story = build_story(&resume);
        assert!(!story
            .iter()
            .any(|b| matches!(b, Block::BulletList { .. })));
    }

    #[test]
    fn test_skills_render_one_labeled_line_per_category() {
        let mut skills = IndexMap::new();
        skills.insert(
            "Programming".to_string(),
            vec!["Python".to_string(), "Go".to_string()],
        );
        let resume = ResumeDocument {
            skills,
            ..ResumeDocument::default()
        };
        let story = build_story(&resume);

        let lines: Vec<&Block> = story
            .iter()
            .filter(|b| matches!(b, Block::LabeledLine { .. }))
            .collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(
            *lines[0],
            Block::LabeledLine {
                label: "Programming".to_string(),
                values: vec!["Python".to_string(), "Go".to_string()],
            }
        );
    }

    #[test]
    fn test_education_rows_pair_school_dates_and_degree_location() {
        let json = r#"{"education": [{"school": "MIT", "degree": "BSc",
                        "location": "Cambridge, MA", "dates": "2018-2022"}]}"#;
        let resume: ResumeDocument = serde_json::from_str(json).expect("resume");
        let story = build_story(&resume);

        let rows: Vec<&Block> = story
            .iter()
            .filter(|b| matches!(b, Block::RoleDateRow { .. }))
            .collect();
        assert_eq!(
            *rows[0],
            Block::RoleDateRow {
                left: "MIT".to_string(),
                right: "2018-2022".to_string(),
                primary: true,
            }
        );
        assert_eq!(
            *rows[1],
            Block::RoleDateRow {
                left: "BSc".to_string(),
                right: "Cambridge, MA".to_string(),
                primary: false,
            }
        );
    }

    #[test]
    fn test_same_input_builds_identical_stories() {
        let json = r#"{"basics": {"name": "Jane"},
                       "experience": [{"role": "Engineer", "bullets": ["Did X"]}]}"#;
        let resume: ResumeDocument = serde_json::from_str(json).expect("resume");
        assert_eq!(build_story(&resume), build_story(&resume));
    }
}
