use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::text::{bounded, KeywordMatcher};

/// Skill tokens recognised in résumé text, lowercase.
pub const SKILL_VOCABULARY: &[&str] = &[
    // languages
    "java", "python", "javascript", "typescript", "c++", "c#", "php", "ruby", "go", "rust",
    // frameworks and runtimes
    "spring", "spring boot", "react", "angular", "vue", "node.js", "express", "django", "flask",
    // data stores
    "mysql", "postgresql", "mongodb", "redis", "elasticsearch",
    // infrastructure
    "docker", "kubernetes", "aws", "azure", "gcp", "jenkins", "git", "linux",
    // web and data
    "html", "css", "sql", "nosql", "microservices", "rest", "graphql",
    // practices
    "junit", "testing", "agile", "scrum", "devops",
];

/// Compiled patterns for one vocabulary entry.
pub struct SkillPatterns {
    pub matcher: KeywordMatcher,
    /// Years-of-experience probes, tried in order:
    /// `5 years of java`, `java (5 years)`, `java - 5 years`.
    pub years: [Regex; 3],
}

impl SkillPatterns {
    fn compile(skill: &str) -> Result<Self, regex::Error> {
        let skill_pattern = bounded(skill);
        let years = [
            case_insensitive(&format!(r"\b(\d+)\s+years?\s+(?:of\s+)?{skill_pattern}"))?,
            case_insensitive(&format!(r"{skill_pattern}\s*\(\s*(\d+)\s+years?\)"))?,
            case_insensitive(&format!(r"{skill_pattern}\s*-\s*(\d+)\s+years?"))?,
        ];
        Ok(Self {
            matcher: KeywordMatcher::whole_word(skill)?,
            years,
        })
    }
}

fn case_insensitive(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// Patterns for every vocabulary entry, in vocabulary order. Compiled once.
pub static SKILL_PATTERNS: Lazy<Vec<SkillPatterns>> = Lazy::new(|| {
    SKILL_VOCABULARY
        .iter()
        .map(|skill| SkillPatterns::compile(skill).expect("vocabulary patterns are valid regex"))
        .collect()
});
