// Field Editors
// Four independent editors, each working on a copy of one record slice and
// publishing the whole replacement slice after every change.

pub mod education;
pub mod entries;
pub mod experience;
pub mod handlers;
pub mod personal_info;
pub mod skills;

use thiserror::Error;

use crate::models::resume::EntryId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("No entry with id {0}")]
    EntryNotFound(EntryId),

    #[error("Skill cannot be empty")]
    EmptySkill,

    #[error("Skill '{0}' is already in the list")]
    DuplicateSkill(String),

    #[error("No skill at position {index} (list has {len})")]
    SkillOutOfRange { index: usize, len: usize },
}
