// Prompts for the three generation operations.
// User input is interpolated once with `format!`, so text that looks like a
// placeholder is sent as written.

/// Professional summary prompt.
pub fn summary_prompt(job_title: &str) -> String {
    format!(
        "Write a professional summary for a {job_title} resume. \
         Keep it concise (3-5 sentences) and professional. \
         Highlight key skills and the value the candidate brings. \
         Do not use first-person pronouns."
    )
}

/// Job description prompt: bullet points led by action verbs.
pub fn job_description_prompt(position: &str, company: &str) -> String {
    format!(
        "Write a professional job description for a {position} at {company}.\n\
         - Focus on key responsibilities and achievements.\n\
         - Use bullet points that start with strong action verbs.\n\
         - Keep it concise and industry-standard."
    )
}

/// Skills list prompt. The reply is expected as one comma-separated line.
pub fn skills_prompt(job_title: &str) -> String {
    format!(
        "Generate a list of 10 relevant skills for a {job_title} position. \
         Include both technical and soft skills. \
         Format the response as a single comma-separated list, for example: \
         JavaScript, Teamwork, Python, Communication, React, Problem Solving, SQL, Leadership, AWS, Time Management"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_have_no_unfilled_placeholders() {
        for prompt in [
            summary_prompt("Data Engineer"),
            job_description_prompt("Engineer", "Acme"),
            skills_prompt("Nurse"),
        ] {
            assert!(!prompt.contains('{'), "unfilled placeholder in: {prompt}");
            assert!(!prompt.contains("  "), "stray indentation in: {prompt}");
        }
    }

    #[test]
    fn test_job_description_prompt_names_position_and_company() {
        let prompt = job_description_prompt("Site Reliability Engineer", "Initech");
        assert!(prompt.contains("Site Reliability Engineer at Initech."));
        assert!(prompt.contains("\n- Use bullet points"));
    }

    #[test]
    fn test_braces_in_user_input_are_not_substituted() {
        let prompt = job_description_prompt("{company} Liaison", "Acme");
        assert!(prompt.contains("for a {company} Liaison at Acme."));

        let prompt = summary_prompt("{job_title} Lead");
        assert!(prompt.contains("for a {job_title} Lead resume."));
    }
}
