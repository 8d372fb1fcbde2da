//! Résumé text through extraction, snapshot assembly and scoring.

use chrono::NaiveDate;
use uuid::Uuid;

use matcher::{
    parse_resume, rank_candidates, recommend_jobs, CandidateSnapshot, EducationLevel,
    EducationRecord, ExperiencePeriod, JobSkillRequirement, JobSnapshot, MatchScorer,
    WeightedMatchScorer,
};

const BACKEND_RESUME: &str = "\
Alex Morgan
alex.morgan@example.com | (415) 555-0134
Education: Bachelor of Science in Computer Science
Summary: 6 years of experience building backend services.
Skills: Java (5 years), Spring Boot (3 years), MySQL - 4 years, Docker
";

const DATA_RESUME: &str = "\
Sam Lee
sam.lee@example.net
MS in Statistics
Python - 6 years, SQL, Docker (2 years)
";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn scorer() -> WeightedMatchScorer {
    WeightedMatchScorer::with_reference_date(date(2026, 1, 1))
}

/// Builds a snapshot the way the service layer does: skills from the parsed
/// résumé, periods and degrees from the candidate's profile rows.
fn snapshot_from(
    id: u128,
    resume: &str,
    experiences: Vec<ExperiencePeriod>,
) -> CandidateSnapshot {
    let parsed = parse_resume(resume);
    let mut candidate = CandidateSnapshot::new(Uuid::from_u128(id));
    candidate.add_resume(parsed.skills);
    candidate.experiences = experiences;
    if let Some(level) = parsed.data.education_level {
        candidate.educations.push(EducationRecord::new(level.as_str()));
    }
    candidate
}

fn java_job() -> JobSnapshot {
    JobSnapshot::new(Uuid::from_u128(100))
        .with_description("senior java developer")
        .with_requirements("Bachelor's degree required")
        .with_skill(JobSkillRequirement::required("java").with_min_years(3).with_weight(0.4))
        .with_skill(
            JobSkillRequirement::required("spring boot")
                .with_min_years(2)
                .with_weight(0.3),
        )
        .with_skill(JobSkillRequirement::optional("mysql").with_min_years(2).with_weight(0.2))
        .with_skill(JobSkillRequirement::optional("docker").with_min_years(1).with_weight(0.1))
}

fn backend_candidate() -> CandidateSnapshot {
    snapshot_from(
        1,
        BACKEND_RESUME,
        vec![
            ExperiencePeriod::new(date(2018, 6, 1), Some(date(2020, 1, 1))),
            ExperiencePeriod::new(date(2020, 1, 1), Some(date(2023, 1, 1))),
        ],
    )
}

#[test]
fn test_resume_fields_are_extracted() {
    let parsed = parse_resume(BACKEND_RESUME);

    assert_eq!(parsed.data.email.as_deref(), Some("alex.morgan@example.com"));
    assert_eq!(parsed.data.phone.as_deref(), Some("(415) 555-0134"));
    assert_eq!(parsed.data.total_experience_years, Some(6));
    assert_eq!(parsed.data.education_level, Some(EducationLevel::Bachelors));

    let skills: Vec<(&str, Option<u32>)> = parsed
        .skills
        .iter()
        .map(|s| (s.name.as_str(), s.years_experience))
        .collect();
    assert_eq!(
        skills,
        vec![
            ("java", Some(5)),
            ("spring", None),
            ("spring boot", Some(3)),
            ("mysql", Some(4)),
            ("docker", None),
        ]
    );
}

#[test]
fn test_senior_java_posting_scores_strong_backend_candidate() {
    let result = scorer().score(&backend_candidate(), &java_job());

    // java 110*0.4 + spring boot 105*0.3 + mysql 110*0.2 + docker 70*0.1, capped
    assert_eq!(result.skill_score, 100.0);
    assert!(result.skill_score > 80.0);
    // 1 + 3 whole years against the five a senior posting asks for
    assert_eq!(result.details.experience_years, 4);
    assert_eq!(result.details.required_experience_years, 5);
    assert_eq!(result.experience_score, 80.0);
    assert_eq!(result.education_score, 100.0);
    assert_eq!(result.total_score, 94.0);
}

#[test]
fn test_details_payload_is_camel_case() {
    let result = scorer().score(&backend_candidate(), &java_job());
    let details = result.details_json().unwrap();

    let breakdown = &details["skillBreakdown"];
    assert_eq!(breakdown["totalRequiredSkills"], 4);
    assert_eq!(breakdown["matchedSkills"], 4);
    assert_eq!(breakdown["skillMatches"].as_array().unwrap().len(), 4);
    assert_eq!(details["experienceYears"], 4);
    assert_eq!(details["educationLevel"], "bachelors");
    assert_eq!(details["scoringWeights"]["skills"], 0.5);
}

#[test]
fn test_rank_puts_matching_background_first() {
    let data_candidate = snapshot_from(
        2,
        DATA_RESUME,
        vec![ExperiencePeriod::new(date(2017, 3, 1), None)],
    );
    let candidates = vec![data_candidate, backend_candidate()];

    let ranked = rank_candidates(&scorer(), &java_job(), &candidates);
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].candidate_id, Uuid::from_u128(1));
    assert!(ranked[0].score.total_score > ranked[1].score.total_score);
}

#[test]
fn test_recommendations_follow_shared_skills() {
    let data_candidate = snapshot_from(2, DATA_RESUME, vec![]);
    let analytics_job = JobSnapshot::new(Uuid::from_u128(200))
        .with_skill(JobSkillRequirement::required("python").with_min_years(3));
    let frontend_job = JobSnapshot::new(Uuid::from_u128(300))
        .with_skill(JobSkillRequirement::required("react"));
    let jobs = vec![java_job(), analytics_job, frontend_job];

    let recommended: Vec<Uuid> = recommend_jobs(&data_candidate, &jobs)
        .into_iter()
        .map(|job| job.job_id)
        .collect();
    // docker makes the java posting relevant too
    assert_eq!(recommended, vec![Uuid::from_u128(100), Uuid::from_u128(200)]);
}

#[test]
fn test_masters_resume_against_phd_requirement() {
    let candidate = snapshot_from(2, DATA_RESUME, vec![]);
    let job = JobSnapshot::new(Uuid::from_u128(400))
        .with_requirements("PhD in Statistics or related field");

    let result = scorer().score(&candidate, &job);
    assert_eq!(result.education_score, 75.0);
    // no declared skills and no experience rows
    assert_eq!(result.skill_score, 100.0);
    assert_eq!(result.experience_score, 20.0);
}
