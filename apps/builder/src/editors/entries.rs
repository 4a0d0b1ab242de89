//! Generic list editor shared by the experience and education editors.
//!
//! The editor owns a local copy of the slice and a publish callback. Every
//! successful mutation hands the callback the full replacement slice; failed
//! operations leave the copy untouched and publish nothing.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::editors::EditorError;
use crate::models::resume::{EntryId, ResumeRecord};
use crate::store::ResumeStore;

/// An addressable entry in one of the record's lists.
pub trait ListEntry: Clone + Send + Sync + 'static {
    /// Editable text fields, addressed by name on the wire.
    type Field: Copy + fmt::Debug + DeserializeOwned + Send + 'static;

    /// A new entry with empty field values and `current == false`.
    fn blank(id: EntryId) -> Self;

    fn id(&self) -> &EntryId;

    fn set_field(&mut self, field: Self::Field, value: String);

    fn set_current(&mut self, current: bool);

    /// The slice of the record holding entries of this type.
    fn slice(record: &ResumeRecord) -> &[Self];

    /// Publishes a replacement slice through the store's setter.
    fn publish(store: &mut ResumeStore, entries: Vec<Self>);
}

pub struct EntryListEditor<E, P>
where
    E: ListEntry,
    P: FnMut(Vec<E>),
{
    entries: Vec<E>,
    publish: P,
}

impl<E, P> EntryListEditor<E, P>
where
    E: ListEntry,
    P: FnMut(Vec<E>),
{
    pub fn new(entries: Vec<E>, publish: P) -> Self {
        Self { entries, publish }
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<E> {
        self.entries
    }

    /// Appends a blank entry with a fresh identity token and returns that token.
    pub fn add(&mut self) -> EntryId {
        let id = EntryId::generate();
        self.entries.push(E::blank(id.clone()));
        self.publish();
        id
    }

    pub fn edit_field(
        &mut self,
        id: &EntryId,
        field: E::Field,
        value: String,
    ) -> Result<(), EditorError> {
        self.find_mut(id)?.set_field(field, value);
        self.publish();
        Ok(())
    }

    /// Sets the `current` flag. The stored end date is left as it is.
    pub fn set_current(&mut self, id: &EntryId, current: bool) -> Result<(), EditorError> {
        self.find_mut(id)?.set_current(current);
        self.publish();
        Ok(())
    }

    pub fn remove(&mut self, id: &EntryId) -> Result<(), EditorError> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id() != id);
        if self.entries.len() == before {
            return Err(EditorError::EntryNotFound(id.clone()));
        }
        self.publish();
        Ok(())
    }

    fn find_mut(&mut self, id: &EntryId) -> Result<&mut E, EditorError> {
        self.entries
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or_else(|| EditorError::EntryNotFound(id.clone()))
    }

    fn publish(&mut self) {
        (self.publish)(self.entries.clone());
    }
}

/// Runs `op` against an editor seeded from the store's current slice, wiring
/// the publish callback to the store's setter. Returns the resulting slice.
pub fn edit_slice<E, F>(store: &mut ResumeStore, op: F) -> Result<Vec<E>, EditorError>
where
    E: ListEntry,
    F: FnOnce(&mut EntryListEditor<E, &mut dyn FnMut(Vec<E>)>) -> Result<(), EditorError>,
{
    let entries = E::slice(store.record()).to_vec();
    let mut publish = |slice: Vec<E>| E::publish(store, slice);
    let mut editor = EntryListEditor::new(entries, &mut publish as &mut dyn FnMut(Vec<E>));
    op(&mut editor)?;
    Ok(editor.into_entries())
}
