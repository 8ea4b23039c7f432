// Prompt constants for plan generation.
// The system instruction is fixed; only the user message varies per request.

/// System prompt for plan generation. Mirrors the `PrepPlan` wire shape.
pub const PLAN_SYSTEM: &str = r#"You are an expert interview preparation coach. Analyze the job description and create a comprehensive, actionable interview preparation plan.

Your response must be a valid JSON object with this exact structure:
{
  "company": "Company name",
  "role": "Job title",
  "keySkills": ["skill1", "skill2", "skill3"],
  "projects": [
    {
      "title": "Project name",
      "description": "What to build",
      "skills": ["skill1", "skill2"],
      "difficulty": "beginner|intermediate|advanced"
    }
  ],
  "codingChallenges": [
    {
      "title": "Challenge name",
      "description": "Challenge description",
      "difficulty": "easy|medium|hard",
      "topics": ["topic1", "topic2"]
    }
  ],
  "behavioralQuestions": [
    {
      "question": "The question",
      "focus": "What to emphasize in answer",
      "tips": "Answer strategy"
    }
  ],
  "studyTimeline": {
    "duration": "2-4 weeks",
    "phases": [
      {
        "phase": "Phase name",
        "duration": "Duration",
        "focus": ["focus1", "focus2"]
      }
    ]
  }
}

Generate 3-5 projects, 5-8 coding challenges, and 5-7 behavioral questions."#;

/// User prompt template. Replace `{job_description}` before sending.
pub const PLAN_USER_TEMPLATE: &str = "Job Description:\n\n{job_description}\n\nCreate a comprehensive interview preparation plan.";

/// Builds the user message. The job description is embedded verbatim.
pub fn build_user_prompt(job_description: &str) -> String {
    PLAN_USER_TEMPLATE.replace("{job_description}", job_description)
}
