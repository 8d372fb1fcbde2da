//! Résumé text mining: skills from a fixed vocabulary plus contact details,
//! total experience and highest education level.
//!
//! Extraction never fails. Text that yields nothing produces empty results.

mod skills;
mod structured;
mod vocabulary;

pub use skills::{extract_skills, infer_proficiency};
pub use structured::extract_resume_data;
pub use vocabulary::SKILL_VOCABULARY;

use crate::models::ParsedResume;

/// Runs both extractors over one résumé body.
pub fn parse_resume(text: &str) -> ParsedResume {
    ParsedResume {
        data: extract_resume_data(text),
        skills: extract_skills(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EducationLevel;

    #[test]
    fn test_parse_resume_bundles_both_extractors() {
        let text = "Jane Roe, jane@example.org\n\
                    MS in Computer Science\n\
                    8 years of experience. Rust (4 years), Kubernetes, PostgreSQL";

        let parsed = parse_resume(text);
        assert_eq!(parsed.data.email.as_deref(), Some("jane@example.org"));
        assert_eq!(parsed.data.education_level, Some(EducationLevel::Masters));
        assert_eq!(parsed.data.total_experience_years, Some(8));

        let names: Vec<&str> = parsed.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["rust", "postgresql", "kubernetes"]);
        assert_eq!(parsed.skills[0].years_experience, Some(4));
    }

    #[test]
    fn test_parse_resume_of_blank_text() {
        let parsed = parse_resume("   \n\t ");
        assert!(parsed.data.is_empty());
        assert!(parsed.skills.is_empty());
    }
}
