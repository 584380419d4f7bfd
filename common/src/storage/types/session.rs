use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The retained state of a conversational session: only the most recent
/// turn survives. Each turn overwrites the previous record wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub query: String,
    pub follow_up_questions: Vec<String>,
    pub relevant_text: String,
    pub updated_at: DateTime<Utc>,
}

impl SessionState {
    pub fn new(query: String, follow_up_questions: Vec<String>, relevant_text: String) -> Self {
        Self {
            query,
            follow_up_questions,
            relevant_text,
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_state_creation() {
        let state = SessionState::new(
            "why is the sky blue".to_string(),
            vec!["What about Clouds form from water vapor?".to_string()],
            "The sky is blue today.".to_string(),
        );

        assert_eq!(state.query, "why is the sky blue");
        assert_eq!(state.follow_up_questions.len(), 1);
        assert!(!state.relevant_text.is_empty());
    }
}
