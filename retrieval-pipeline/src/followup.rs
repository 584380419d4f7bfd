use crate::segment::{RuleSegmenter, SentenceSegmenter};

pub const MAX_FOLLOW_UP_QUESTIONS: usize = 3;

/// Sentences at or below this length (trimmed) are too thin to ask about.
const MIN_SENTENCE_CHARS: usize = 20;

/// How many leading words of a sentence seed the question.
const QUESTION_SEED_WORDS: usize = 5;

/// Derives up to three candidate follow-up questions from the relevant
/// text, skipping any that already appeared in `previous_questions`.
pub fn generate(relevant_text: &str, previous_questions: &[String]) -> Vec<String> {
    generate_with(&RuleSegmenter, relevant_text, previous_questions)
}

/// This is a keyword-window heuristic, not semantic question generation:
/// near-duplicate sentences with different leading words both survive.
pub fn generate_with(
    segmenter: &dyn SentenceSegmenter,
    relevant_text: &str,
    previous_questions: &[String],
) -> Vec<String> {
    let mut questions = Vec::new();

    for sentence in segmenter.segment(relevant_text) {
        let sentence = sentence.trim();

        if sentence.chars().count() > MIN_SENTENCE_CHARS {
            let seed: Vec<&str> = sentence
                .split_whitespace()
                .take(QUESTION_SEED_WORDS)
                .collect();
            let question = format!("What about {}?", seed.join(" "));

            if !previous_questions.contains(&question) {
                questions.push(question);
            }
        }

        if questions.len() >= MAX_FOLLOW_UP_QUESTIONS {
            break;
        }
    }

    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_questions_from_leading_words() {
        let text = "The sky is blue today. Clouds form from water vapor condensation process.";
        let questions = generate(text, &[]);

        assert_eq!(
            questions,
            vec![
                "What about The sky is blue today.?".to_string(),
                "What about Clouds form from water vapor?".to_string(),
            ]
        );
    }

    #[test]
    fn test_never_returns_more_than_three() {
        let text = "Solar panels convert light into electricity. \
                    Wind turbines capture kinetic energy from moving air. \
                    Hydroelectric dams store potential energy in reservoirs. \
                    Geothermal plants tap heat from deep underground.";
        let questions = generate(text, &[]);
        assert_eq!(questions.len(), MAX_FOLLOW_UP_QUESTIONS);
    }

    #[test]
    fn test_short_sentences_are_skipped() {
        let text = "Too short. This sentence is comfortably long enough to keep.";
        let questions = generate(text, &[]);

        assert_eq!(
            questions,
            vec!["What about This sentence is comfortably long?".to_string()]
        );
    }

    #[test]
    fn test_previous_questions_are_not_repeated() {
        let text = "The sky is blue today. Clouds form from water vapor condensation process.";
        let previous = vec!["What about The sky is blue today.?".to_string()];
        let questions = generate(text, &previous);

        assert_eq!(
            questions,
            vec!["What about Clouds form from water vapor?".to_string()]
        );
        for question in &questions {
            assert!(!previous.contains(question));
        }
    }

    #[test]
    fn test_empty_text_yields_no_questions() {
        assert!(generate("", &[]).is_empty());
    }

    #[test]
    fn test_digit_separators_do_not_leak_into_questions() {
        let text = "Revenue grew to 1,234 units across all regions this year.";
        let questions = generate(text, &[]);
        assert_eq!(
            questions,
            vec!["What about Revenue grew to 1 234?".to_string()]
        );
    }
}
