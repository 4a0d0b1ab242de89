use serde::{Deserialize, Serialize};

use crate::models::resume::PersonalInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalField {
    Name,
    Email,
    Phone,
    Location,
    Title,
    Summary,
}

/// Single-object editor: no list, no identity.
pub struct PersonalInfoEditor<P>
where
    P: FnMut(PersonalInfo),
{
    info: PersonalInfo,
    publish: P,
}

impl<P> PersonalInfoEditor<P>
where
    P: FnMut(PersonalInfo),
{
    pub fn new(info: PersonalInfo, publish: P) -> Self {
        Self { info, publish }
    }

    #[cfg(test)]
    pub fn info(&self) -> &PersonalInfo {
        &self.info
    }

    pub fn into_info(self) -> PersonalInfo {
        self.info
    }

    pub fn set_field(&mut self, field: PersonalField, value: String) {
        let slot = match field {
            PersonalField::Name => &mut self.info.name,
            PersonalField::Email => &mut self.info.email,
            PersonalField::Phone => &mut self.info.phone,
            PersonalField::Location => &mut self.info.location,
            PersonalField::Title => &mut self.info.title,
            PersonalField::Summary => &mut self.info.summary,
        };
        *slot = value;
        (self.publish)(self.info.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_field_publishes_whole_object() {
        let mut published = Vec::new();
        let initial = PersonalInfo {
            name: "Jane Doe".to_string(),
            ..Default::default()
        };
        let mut editor = PersonalInfoEditor::new(initial, |info| published.push(info));

        editor.set_field(PersonalField::Title, "Staff Engineer".to_string());
        editor.set_field(PersonalField::Email, "jane@example.com".to_string());
        drop(editor);

        assert_eq!(published.len(), 2);
        let last = published.last().unwrap();
        assert_eq!(last.name, "Jane Doe");
        assert_eq!(last.title, "Staff Engineer");
        assert_eq!(last.email, "jane@example.com");
    }

    #[test]
    fn test_no_format_validation_on_email() {
        let mut editor = PersonalInfoEditor::new(PersonalInfo::default(), |_| {});
        editor.set_field(PersonalField::Email, "not an email".to_string());
        assert_eq!(editor.info().email, "not an email");
    }
}
