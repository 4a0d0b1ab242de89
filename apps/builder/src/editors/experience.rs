use serde::{Deserialize, Serialize};

use crate::editors::entries::ListEntry;
use crate::models::resume::{EntryId, ExperienceEntry, ResumeRecord};
use crate::store::ResumeStore;

/// Text fields of an experience entry that the form edits by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceField {
    Company,
    Position,
    StartDate,
    EndDate,
    Description,
}

impl ListEntry for ExperienceEntry {
    type Field = ExperienceField;

    fn blank(id: EntryId) -> Self {
        ExperienceEntry {
            id,
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            description: String::new(),
        }
    }

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn set_field(&mut self, field: ExperienceField, value: String) {
        let slot = match field {
            ExperienceField::Company => &mut self.company,
            ExperienceField::Position => &mut self.position,
            ExperienceField::StartDate => &mut self.start_date,
            ExperienceField::EndDate => &mut self.end_date,
            ExperienceField::Description => &mut self.description,
        };
        *slot = value;
    }

    fn set_current(&mut self, current: bool) {
        self.current = current;
    }

    fn slice(record: &ResumeRecord) -> &[Self] {
        &record.experience
    }

    fn publish(store: &mut ResumeStore, entries: Vec<Self>) {
        store.set_experience(entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editors::entries::EntryListEditor;

    #[test]
    fn test_field_names_match_the_form() {
        let field: ExperienceField = serde_json::from_str("\"startDate\"").unwrap();
        assert_eq!(field, ExperienceField::StartDate);
        assert!(serde_json::from_str::<ExperienceField>("\"current\"").is_err());
        assert!(serde_json::from_str::<ExperienceField>("\"id\"").is_err());
    }

    #[test]
    fn test_edit_touches_only_the_target_entry() {
        let mut editor = EntryListEditor::new(Vec::<ExperienceEntry>::new(), |_| {});
        let first = editor.add();
        let second = editor.add();

        editor
            .edit_field(&second, ExperienceField::Description, "Shipped v2".to_string())
            .unwrap();

        assert_eq!(editor.entries()[0], ExperienceEntry::blank(first));
        assert_eq!(editor.entries()[1].description, "Shipped v2");
        assert_eq!(editor.entries()[1].id, second);
    }

    #[test]
    fn test_toggling_current_preserves_end_date() {
        let mut editor = EntryListEditor::new(Vec::<ExperienceEntry>::new(), |_| {});
        let id = editor.add();
        editor
            .edit_field(&id, ExperienceField::EndDate, "2023-06".to_string())
            .unwrap();

        editor.set_current(&id, true).unwrap();
        assert!(editor.entries()[0].current);
        assert_eq!(editor.entries()[0].end_date, "2023-06");

        editor.set_current(&id, false).unwrap();
        assert!(!editor.entries()[0].current);
        assert_eq!(editor.entries()[0].end_date, "2023-06");
    }
}
