//! Skills reply parsing and merge rules.

/// Splits a comma-separated provider reply into skill labels.
///
/// Segments are trimmed and empty segments dropped; order is preserved.
pub fn parse_skill_list(reply: &str) -> Vec<String> {
    reply
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns the generated labels not already in `existing`, in generated order.
///
/// Matching is case-sensitive and exact. A label repeated within `generated`
/// is kept once.
pub fn new_skills(existing: &[String], generated: Vec<String>) -> Vec<String> {
    let mut accepted: Vec<String> = Vec::new();
    for skill in generated {
        if !existing.contains(&skill) && !accepted.contains(&skill) {
            accepted.push(skill);
        }
    }
    accepted
}
