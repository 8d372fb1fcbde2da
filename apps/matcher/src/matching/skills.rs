use tracing::debug;

use crate::models::{JobSkillRequirement, JobSnapshot, SkillBreakdown, SkillInventory, SkillMatch};

/// Score for a job that declares no skills.
const NO_REQUIREMENTS_SCORE: f64 = 100.0;
/// Score for a held skill with no recorded years.
const UNQUANTIFIED_SKILL_SCORE: f64 = 70.0;
const EXCESS_YEAR_BONUS: f64 = 5.0;
const MAX_EXCESS_BONUS: f64 = 30.0;
/// Floor for a held skill short of the required years.
const SHORTFALL_FLOOR: f64 = 50.0;
const MAX_SKILL_SCORE: f64 = 100.0;

/// Weighted skill overlap, scaled by the share of required skills held.
///
/// Individual skills may score above 100 when the candidate exceeds the
/// required years; only the final figure is capped.
pub fn skill_score(inventory: &SkillInventory, job: &JobSnapshot) -> f64 {
    if job.skills.is_empty() {
        return NO_REQUIREMENTS_SCORE;
    }
    if inventory.is_empty() {
        return 0.0;
    }

    let mut total_weight = 0.0_f64;
    let mut weighted_score = 0.0_f64;
    let mut matched_required = 0_usize;
    let mut total_required = 0_usize;

    for job_skill in &job.skills {
        let weight = job_skill.effective_weight();
        total_weight += weight;

        if job_skill.required {
            total_required += 1;
        }

        if inventory.contains(&job_skill.name) {
            weighted_score += individual_skill_score(inventory, job_skill) * weight;
            if job_skill.required {
                matched_required += 1;
            }
        }
    }

    let required_ratio = if total_required > 0 {
        matched_required as f64 / total_required as f64
    } else {
        1.0
    };
    let average = if total_weight > 0.0 {
        weighted_score / total_weight
    } else {
        0.0
    };

    debug!(
        "Skill score: {matched_required}/{total_required} required matched, weighted average {average:.2}"
    );

    (average * required_ratio).min(MAX_SKILL_SCORE)
}

/// Score for one job skill the candidate is known to hold.
pub fn individual_skill_score(inventory: &SkillInventory, job_skill: &JobSkillRequirement) -> f64 {
    years_score(inventory.years(&job_skill.name), job_skill.min_years.unwrap_or(0))
}

fn years_score(candidate_years: Option<u32>, required_years: u32) -> f64 {
    let Some(candidate_years) = candidate_years else {
        return UNQUANTIFIED_SKILL_SCORE;
    };

    if candidate_years >= required_years {
        let bonus = (f64::from(candidate_years - required_years) * EXCESS_YEAR_BONUS)
            .min(MAX_EXCESS_BONUS);
        100.0 + bonus
    } else {
        (f64::from(candidate_years) / f64::from(required_years) * 100.0).max(SHORTFALL_FLOOR)
    }
}

/// Per-skill explanation lines plus match counts.
pub fn skill_breakdown(inventory: &SkillInventory, job: &JobSnapshot) -> SkillBreakdown {
    let skill_matches: Vec<SkillMatch> = job
        .skills
        .iter()
        .map(|job_skill| SkillMatch {
            skill: job_skill.name.clone(),
            required: job_skill.required,
            min_years: job_skill.min_years,
            weight: job_skill.weight,
            matched: inventory.contains(&job_skill.name),
            candidate_years: inventory.years(&job_skill.name),
        })
        .collect();
    let matched_skills = skill_matches.iter().filter(|m| m.matched).count();

    SkillBreakdown {
        total_required_skills: job.skills.len(),
        matched_skills,
        skill_matches,
    }
}
