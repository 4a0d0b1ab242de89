use crate::editors::EditorError;
use crate::generation::skills::new_skills;

/// Skills editor: add by text, remove by position, merge generated labels.
pub struct SkillsEditor<P>
where
    P: FnMut(Vec<String>),
{
    skills: Vec<String>,
    publish: P,
}

impl<P> SkillsEditor<P>
where
    P: FnMut(Vec<String>),
{
    pub fn new(skills: Vec<String>, publish: P) -> Self {
        Self { skills, publish }
    }

    #[cfg(test)]
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn into_skills(self) -> Vec<String> {
        self.skills
    }

    /// Adds a trimmed label. Empty input and exact duplicates are rejected.
    pub fn add(&mut self, text: &str) -> Result<(), EditorError> {
        let skill = text.trim();
        if skill.is_empty() {
            return Err(EditorError::EmptySkill);
        }
        if self.skills.iter().any(|s| s == skill) {
            return Err(EditorError::DuplicateSkill(skill.to_string()));
        }
        self.skills.push(skill.to_string());
        self.publish();
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<String, EditorError> {
        if index >= self.skills.len() {
            return Err(EditorError::SkillOutOfRange {
                index,
                len: self.skills.len(),
            });
        }
        let removed = self.skills.remove(index);
        self.publish();
        Ok(removed)
    }

    /// Appends generated labels not already present. Returns how many were added.
    pub fn merge(&mut self, generated: Vec<String>) -> usize {
        let fresh = new_skills(&self.skills, generated);
        let added = fresh.len();
        if added > 0 {
            self.skills.extend(fresh);
            self.publish();
        }
        added
    }

    fn publish(&mut self) {
        (self.publish)(self.skills.clone());
    }
}
