// src/layout/cover_letter.rs
use super::{join_present, Align, Block, TextRole};
use crate::types::CoverLetterDocument;
use chrono::NaiveDate;

/// Fixed order: header → date → greeting → body paragraphs → closing.
/// The date is injected so a story built for a given day is deterministic.
pub fn build_story(letter: &CoverLetterDocument, today: NaiveDate) -> Vec<Block> {
    let mut story = Vec::new();

    let applicant = &letter.applicant;
    story.push(Block::text(
        applicant.name.as_str(),
        TextRole::HeaderName,
        Align::Left,
    ));

    let contact = join_present(&[applicant.email.as_deref(), applicant.phone.as_deref()]);
    if !contact.is_empty() {
        story.push(Block::text(contact, TextRole::Header, Align::Left));
    }
    let links = join_present(&[applicant.linkedin.as_deref(), applicant.github.as_deref()]);
    if !links.is_empty() {
        story.push(Block::text(links, TextRole::Header, Align::Left));
    }
    story.push(Block::Gap(1.0));

    story.push(Block::text(
        today.format("%B %d, %Y").to_string(),
        TextRole::LetterBody,
        Align::Left,
    ));
    story.push(Block::text(
        format!("Dear {},", letter.document.recipient.title),
        TextRole::LetterBody,
        Align::Left,
    ));
    story.push(Block::Gap(0.5));

    for paragraph in &letter.document.body {
        if paragraph.trim().is_empty() {
            continue;
        }
        story.push(Block::text(
            paragraph.as_str(),
            TextRole::LetterBody,
            Align::Left,
        ));
        story.push(Block::Gap(0.5));
    }

    if let Some(closing) = &letter.document.closing {
        story.push(Block::Gap(1.0));
        story.push(Block::text(
            closing.signature.as_str(),
            TextRole::Closing,
            Align::Left,
        ));
        story.push(Block::text(
            closing.name.as_str(),
            TextRole::LetterBody,
            Align::Left,
        ));
    }

    story
}
