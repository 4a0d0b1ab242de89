//! Resume aggregate state: the single owner of the [`ResumeRecord`].
//!
//! Editors never mutate the record in place: they publish whole replacement
//! slices through the four setters below.

use crate::models::resume::{EducationEntry, ExperienceEntry, PersonalInfo, ResumeRecord};

#[derive(Debug, Default)]
pub struct ResumeStore {
    record: ResumeRecord,
}

impl ResumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &ResumeRecord {
        &self.record
    }

    /// Owned copy for consumers that outlive the lock (preview, export).
    pub fn snapshot(&self) -> ResumeRecord {
        self.record.clone()
    }

    pub fn set_personal_info(&mut self, personal_info: PersonalInfo) {
        self.record.personal_info = personal_info;
    }

    pub fn set_experience(&mut self, experience: Vec<ExperienceEntry>) {
        self.record.experience = experience;
    }

    pub fn set_education(&mut self, education: Vec<EducationEntry>) {
        self.record.education = education;
    }

    pub fn set_skills(&mut self, skills: Vec<String>) {
        self.record.skills = skills;
    }
}
