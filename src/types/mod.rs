mod cover_letter;
mod resume;

pub use cover_letter::{Applicant, Closing, CoverLetterDocument, Letter, Recipient};
pub use resume::{Basics, Education, Experience, Project, ResumeDocument};
