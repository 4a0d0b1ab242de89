use serde::{Deserialize, Serialize};

use crate::editors::entries::ListEntry;
use crate::models::resume::{EducationEntry, EntryId, ResumeRecord};
use crate::store::ResumeStore;

/// Text fields of an education entry that the form edits by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationField {
    Institution,
    Degree,
    Field,
    StartDate,
    EndDate,
}

impl ListEntry for EducationEntry {
    type Field = EducationField;

    fn blank(id: EntryId) -> Self {
        EducationEntry {
            id,
            institution: String::new(),
            degree: String::new(),
            field: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
        }
    }

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn set_field(&mut self, field: EducationField, value: String) {
        let slot = match field {
            EducationField::Institution => &mut self.institution,
            EducationField::Degree => &mut self.degree,
            EducationField::Field => &mut self.field,
            EducationField::StartDate => &mut self.start_date,
            EducationField::EndDate => &mut self.end_date,
        };
        *slot = value;
    }

    fn set_current(&mut self, current: bool) {
        self.current = current;
    }

    fn slice(record: &ResumeRecord) -> &[Self] {
        &record.education
    }

    fn publish(store: &mut ResumeStore, entries: Vec<Self>) {
        store.set_education(entries);
    }
}
