//! Plan rendering — Markdown view of a `PrepPlan` and file export.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::plan::models::PrepPlan;

/// Visual weight of a difficulty badge. Matching is case-insensitive and
/// covers both the project and the challenge scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyTone {
    Easy,
    Medium,
    Hard,
    Neutral,
}

impl DifficultyTone {
    pub fn classify(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "easy" | "beginner" => DifficultyTone::Easy,
            "medium" | "intermediate" => DifficultyTone::Medium,
            "hard" | "advanced" => DifficultyTone::Hard,
            _ => DifficultyTone::Neutral,
        }
    }

    fn marker(&self) -> &'static str {
        match self {
            DifficultyTone::Easy => "🟢",
            DifficultyTone::Medium => "🟡",
            DifficultyTone::Hard => "🔴",
            DifficultyTone::Neutral => "⚪",
        }
    }
}

fn badge(label: &str) -> String {
    format!("{} `{}`", DifficultyTone::classify(label).marker(), label)
}

fn tags(items: &[String]) -> String {
    items
        .iter()
        .map(|i| format!("`{i}`"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the plan in display order: header, timeline, projects,
/// coding challenges, behavioral questions.
pub fn render_markdown(plan: &PrepPlan) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n## at {}\n\n", plan.role, plan.company));
    out.push_str(&format!("{}\n\n", tags(&plan.key_skills)));

    let timeline = &plan.study_timeline;
    out.push_str(&format!("## Study Timeline ({})\n\n", timeline.duration));
    for (idx, phase) in timeline.phases.iter().enumerate() {
        out.push_str(&format!(
            "{}. **{}** ({})\n   {}\n",
            idx + 1,
            phase.phase,
            phase.duration,
            tags(&phase.focus)
        ));
    }
    out.push('\n');

    out.push_str("## Portfolio Projects\n\n");
    for project in &plan.projects {
        out.push_str(&format!(
            "### {} {}\n\n{}\n\n{}\n\n",
            project.title,
            badge(project.difficulty.as_str()),
            project.description,
            tags(&project.skills)
        ));
    }

    out.push_str("## Coding Challenges\n\n");
    for challenge in &plan.coding_challenges {
        out.push_str(&format!(
            "### {} {}\n\n{}\n\n{}\n\n",
            challenge.title,
            badge(challenge.difficulty.as_str()),
            challenge.description,
            tags(&challenge.topics)
        ));
    }

    out.push_str("## Behavioral Questions\n\n");
    for q in &plan.behavioral_questions {
        out.push_str(&format!(
            "### {}\n\n- **Focus:** {}\n- **Strategy:** {}\n\n",
            q.question, q.focus, q.tips
        ));
    }

    out
}

/// `{role}_at_{company}_Prep_Plan.md`, with path-unsafe characters replaced.
pub fn export_file_name(plan: &PrepPlan) -> String {
    let sanitize = |s: &str| -> String {
        s.trim()
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect()
    };
    format!(
        "{}_at_{}_Prep_Plan.md",
        sanitize(&plan.role),
        sanitize(&plan.company)
    )
}

/// Writes the rendered plan into `dir` and returns the file path.
pub fn export_plan(dir: &Path, plan: &PrepPlan) -> Result<PathBuf> {
    let path = dir.join(export_file_name(plan));
    std::fs::write(&path, render_markdown(plan))
        .with_context(|| format!("Failed to write prep plan to {}", path.display()))?;
    info!("Prep plan exported to {}", path.display());
    Ok(path)
}
