//! Prompts sent to the chat-completions provider.

use super::GenerationRequest;

/// Instructions that fix the planner persona and the response shape.
pub const SYSTEM_PROMPT: &str = r#"You are a professional project manager and productivity coach.
Break the user's goal down into a realistic, time-boxed plan.

Rules:
1. Total budget: the user gives a total duration (for example "5 hours"). The sum of all sub-task times must match it closely.
2. Realistic estimates: research usually takes 30-60 minutes, deep work 60-120 minutes, short breaks 5-10 minutes. Never give 5 minutes to a complex task.
3. Format: respond with a single JSON object with exactly this structure:
{
  "projectName": "string",
  "steps": [
    {
      "id": "unique_id",
      "title": "string",
      "subTasks": [
        { "id": "unique_sub_id", "task": "string", "time": 30, "done": false }
      ]
    }
  ]
}
4. Time field: "time" is a plain integer number of minutes. No strings, no units."#;

/// The user message for `request`.
pub fn user_prompt(request: &GenerationRequest) -> String {
    format!(
        "Create a detailed plan for \"{goal}\" with a total duration of \"{duration}\".\n\
         Every step must have sub-tasks and every sub-task its own estimated time, \
         sized realistically against the total duration.\n\
         Return \"time\" as a plain number of minutes (e.g. 30, 45, 120) without units \
         such as \"min\" or \"hours\".",
        goal = request.goal,
        duration = request.duration,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_prompt_mentions_goal_and_duration() {
        let prompt = user_prompt(&GenerationRequest::new("Learn Rust", "5 hours"));
        assert!(prompt.contains("\"Learn Rust\""));
        assert!(prompt.contains("\"5 hours\""));
        assert!(prompt.contains("plain number of minutes"));
    }

    #[test]
    fn test_system_prompt_describes_shape() {
        for key in ["projectName", "steps", "subTasks", "time", "done"] {
            assert!(SYSTEM_PROMPT.contains(key), "missing {key}");
        }
    }
}
