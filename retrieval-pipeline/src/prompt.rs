/// Instruction framing the generation call: answers must stay inside the
/// supplied context and under the length cap.
pub const ANSWER_SYSTEM_PROMPT: &str = "You are a knowledgeable assistant. Your role is to \
    provide accurate and concise responses based only on the information in the provided \
    documents. Answer the user's question in a professional tone, using no more than 100 \
    words. Do not include any information that is not found in the documents.";

pub fn create_user_message(relevant_text: &str, query: &str) -> String {
    format!(
        r"
        Relevant Context from Documents:
        ==================
        {relevant_text}

        User's Question:
        ==================
        {query}
        "
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_contains_context_and_query() {
        let message = create_user_message("The sky is blue today.", "why is the sky blue");
        assert!(message.contains("The sky is blue today."));
        assert!(message.contains("why is the sky blue"));
    }

    #[test]
    fn test_system_prompt_bounds_the_answer() {
        assert!(ANSWER_SYSTEM_PROMPT.contains("no more than 100"));
        assert!(ANSWER_SYSTEM_PROMPT.contains("provided"));
    }
}
