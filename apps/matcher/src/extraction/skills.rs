use regex::Regex;
use tracing::debug;

use crate::extraction::vocabulary::{SkillPatterns, SKILL_PATTERNS};
use crate::models::{Proficiency, SkillRecord};
use crate::text::char_window;

/// Characters inspected either side of a skill mention for level words.
const CONTEXT_RADIUS: usize = 50;

/// Level words, strongest first. The first group found in the context wins.
const PROFICIENCY_KEYWORDS: &[(Proficiency, &[&str])] = &[
    (Proficiency::Expert, &["expert", "advanced", "senior", "lead"]),
    (Proficiency::Advanced, &["proficient", "experienced"]),
    (Proficiency::Intermediate, &["intermediate", "familiar"]),
    (Proficiency::Beginner, &["beginner", "basic"]),
];

/// One record per vocabulary skill mentioned as a whole word, in vocabulary
/// order.
pub fn extract_skills(text: &str) -> Vec<SkillRecord> {
    let skills: Vec<SkillRecord> = SKILL_PATTERNS
        .iter()
        .filter_map(|patterns| detect_skill(text, patterns))
        .collect();

    debug!("Extracted {} skills from résumé text", skills.len());
    skills
}

fn detect_skill(text: &str, patterns: &SkillPatterns) -> Option<SkillRecord> {
    let occurrence = patterns.matcher.find(text)?;
    let context = char_window(text, occurrence, CONTEXT_RADIUS);

    Some(SkillRecord {
        name: patterns.matcher.keyword().to_string(),
        years_experience: years_of_experience(text, &patterns.years),
        proficiency: infer_proficiency(context),
    })
}

/// First integer captured by the probes, in order. A capture that does not
/// fit in `u32` counts as no match for that probe.
fn years_of_experience(text: &str, probes: &[Regex]) -> Option<u32> {
    probes.iter().find_map(|probe| {
        probe
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|years| years.as_str().parse::<u32>().ok())
    })
}

/// Level implied by the words around a skill mention. Defaults to
/// intermediate.
pub fn infer_proficiency(context: &str) -> Proficiency {
    let context = context.to_lowercase();
    PROFICIENCY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| context.contains(keyword)))
        .map_or(Proficiency::default(), |(level, _)| *level)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(skills: &'a [SkillRecord], name: &str) -> Option<&'a SkillRecord> {
        skills.iter().find(|skill| skill.name == name)
    }

    fn names(skills: &[SkillRecord]) -> Vec<&str> {
        skills.iter().map(|skill| skill.name.as_str()).collect()
    }

    const RESUME: &str = r#"
        John Doe
        Software Engineer

        Skills:
        - Java (5 years)
        - Spring Boot (3 years)
        - Python
        - React
        - MySQL
        - Docker

        Experience:
        Senior Software Engineer at Tech Corp
        Developed web applications using Java and Spring Boot.
    "#;

    #[test]
    fn test_extracts_listed_skills() {
        let skills = extract_skills(RESUME);
        let names = names(&skills);
        for expected in ["java", "spring", "spring boot", "python", "react", "mysql", "docker"] {
            assert!(names.contains(&expected), "missing {expected} in {names:?}");
        }
        assert_eq!(find(&skills, "java").unwrap().years_experience, Some(5));
        assert_eq!(find(&skills, "spring boot").unwrap().years_experience, Some(3));
        assert_eq!(find(&skills, "python").unwrap().years_experience, None);
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(extract_skills("").is_empty());
    }

    #[test]
    fn test_text_without_skills_yields_nothing() {
        let text = "John Doe\n123 Main Street\nAnytown, USA\nI am a hardworking individual.";
        assert!(extract_skills(text).is_empty());
    }

    #[test]
    fn test_substring_occurrence_is_not_a_skill() {
        let skills = extract_skills("I have experience with JavaScript and TypeScript.");
        let names = names(&skills);
        assert!(names.contains(&"javascript"));
        assert!(names.contains(&"typescript"));
        assert!(!names.contains(&"java"));
    }

    #[test]
    fn test_years_parenthesized_after_skill() {
        let skills = extract_skills("Java (5 years)");
        assert_eq!(find(&skills, "java").unwrap().years_experience, Some(5));
    }

    #[test]
    fn test_years_phrase_before_skill() {
        let skills = extract_skills("5 years of Java experience");
        assert_eq!(find(&skills, "java").unwrap().years_experience, Some(5));
    }

    #[test]
    fn test_years_hyphenated_after_skill() {
        let skills = extract_skills("Java - 3 years");
        assert_eq!(find(&skills, "java").unwrap().years_experience, Some(3));
    }

    #[test]
    fn test_years_without_pattern_stays_unset() {
        let skills = extract_skills("Python programming for 7 years");
        assert_eq!(find(&skills, "python").unwrap().years_experience, None);
    }

    #[test]
    fn test_years_of_other_skill_do_not_leak() {
        let skills = extract_skills("Java developer. 4 years of JavaScript");
        assert_eq!(find(&skills, "java").unwrap().years_experience, None);
        assert_eq!(find(&skills, "javascript").unwrap().years_experience, Some(4));
    }

    #[test]
    fn test_overflowing_years_falls_through_to_next_probe() {
        let skills = extract_skills("99999999999 years of Rust. Rust - 2 years");
        assert_eq!(find(&skills, "rust").unwrap().years_experience, Some(2));
    }

    #[test]
    fn test_symbol_skills_are_detected() {
        let skills = extract_skills("Languages: C++ (4 years), C#, Node.js");
        assert_eq!(find(&skills, "c++").unwrap().years_experience, Some(4));
        assert!(find(&skills, "c#").is_some());
        assert!(find(&skills, "node.js").is_some());
    }

    #[test]
    fn test_proficiency_from_context() {
        let cases = [
            ("Expert in Java programming", "java", Proficiency::Expert),
            ("Advanced Python developer", "python", Proficiency::Expert),
            ("Proficient in React", "react", Proficiency::Advanced),
            ("Familiar with Docker", "docker", Proficiency::Intermediate),
            ("Basic knowledge of Kubernetes", "kubernetes", Proficiency::Beginner),
            ("Used Redis", "redis", Proficiency::Intermediate),
        ];
        for (text, skill, expected) in cases {
            let skills = extract_skills(text);
            let record = find(&skills, skill).unwrap_or_else(|| panic!("{skill} not found"));
            assert_eq!(record.proficiency, expected, "for {text:?}");
        }
    }

    #[test]
    fn test_proficiency_context_is_limited_to_window() {
        let padding = "x".repeat(60);
        let text = format!("Expert {padding} Docker");
        let skills = extract_skills(&text);
        assert_eq!(find(&skills, "docker").unwrap().proficiency, Proficiency::Intermediate);
    }

    #[test]
    fn test_infer_proficiency_priority() {
        assert_eq!(infer_proficiency("basic but expert"), Proficiency::Expert);
        assert_eq!(infer_proficiency("familiar, experienced"), Proficiency::Advanced);
        assert_eq!(infer_proficiency(""), Proficiency::Intermediate);
    }
}
