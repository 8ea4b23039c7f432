use std::ops::RangeInclusive;

use crate::plan::models::PrepPlan;

/// Target counts requested in the system prompt. Advisory only.
pub const PROJECTS_TARGET: RangeInclusive<usize> = 3..=5;
pub const CHALLENGES_TARGET: RangeInclusive<usize> = 5..=8;
pub const BEHAVIORAL_TARGET: RangeInclusive<usize> = 5..=7;

/// Checks that every sequence in the plan is non-empty.
///
/// Returns all violations at once, each naming the offending path
/// (e.g. `projects[2].skills`).
pub fn check_shape(plan: &PrepPlan) -> Result<(), Vec<String>> {
    let mut violations = Vec::new();

    let mut require = |path: String, len: usize| {
        if len == 0 {
            violations.push(format!("{path} is empty"));
        }
    };

    require("keySkills".to_string(), plan.key_skills.len());
    require("projects".to_string(), plan.projects.len());
    require("codingChallenges".to_string(), plan.coding_challenges.len());
    require(
        "behavioralQuestions".to_string(),
        plan.behavioral_questions.len(),
    );
    require(
        "studyTimeline.phases".to_string(),
        plan.study_timeline.phases.len(),
    );

    for (i, project) in plan.projects.iter().enumerate() {
        require(format!("projects[{i}].skills"), project.skills.len());
    }
    for (i, challenge) in plan.coding_challenges.iter().enumerate() {
        require(format!("codingChallenges[{i}].topics"), challenge.topics.len());
    }
    for (i, phase) in plan.study_timeline.phases.iter().enumerate() {
        require(format!("studyTimeline.phases[{i}].focus"), phase.focus.len());
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Lists counts that fall outside the prompt's target ranges.
pub fn cardinality_advisories(plan: &PrepPlan) -> Vec<String> {
    [
        ("projects", plan.projects.len(), PROJECTS_TARGET),
        (
            "codingChallenges",
            plan.coding_challenges.len(),
            CHALLENGES_TARGET,
        ),
        (
            "behavioralQuestions",
            plan.behavioral_questions.len(),
            BEHAVIORAL_TARGET,
        ),
    ]
    .into_iter()
    .filter(|(_, count, target)| !target.contains(count))
    .map(|(name, count, target)| {
        format!(
            "{name}: got {count}, expected {}-{}",
            target.start(),
            target.end()
        )
    })
    .collect()
}
