use std::sync::LazyLock;

use regex::Regex;

/// Sentence-segmentation capability. The default implementation is a
/// lightweight rule set; swap in a real tokenizer here without touching the
/// follow-up generator or the orchestrator.
pub trait SentenceSegmenter: Send + Sync {
    fn segment(&self, text: &str) -> Vec<String>;
}

#[allow(clippy::expect_used)]
static DIGIT_GROUP_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)[,;](\d+)").expect("digit separator pattern is valid"));
#[allow(clippy::expect_used)]
static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Rule-based segmenter: normalizes whitespace and digit-group separators,
/// then splits on terminal punctuation followed by whitespace, keeping
/// dotted abbreviations and initials intact.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleSegmenter;

impl SentenceSegmenter for RuleSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        split_sentences(&normalize(text))
    }
}

/// Separators inside digit groups would otherwise read as punctuation in
/// the middle of a token; whitespace runs collapse to single spaces.
fn normalize(text: &str) -> String {
    let text = DIGIT_GROUP_SEPARATORS.replace_all(text, "$1 $2");
    WHITESPACE_RUNS.replace_all(&text, " ").trim().to_string()
}

fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        current.push(c);

        if !matches!(c, '.' | '!' | '?') {
            continue;
        }

        // A real boundary needs whitespace (or end of input) after the
        // terminal; "3.14" stays together.
        let at_end = i + 1 >= chars.len();
        let next_is_space = chars.get(i + 1).is_some_and(|next| next.is_whitespace());
        if !(at_end || next_is_space) {
            continue;
        }

        if c == '.' && ends_with_abbreviation(&current) {
            continue;
        }

        let trimmed = current.trim();
        if !trimmed.is_empty() {
            sentences.push(trimmed.to_string());
        }
        current.clear();
    }

    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }

    sentences
}

/// True when the buffer's final period belongs to an abbreviation rather
/// than a sentence: dotted forms ("e.g.", "U.S."), single-letter initials
/// ("J."), and two-letter titlecase abbreviations ("Mr.", "Dr.").
fn ends_with_abbreviation(buffer: &str) -> bool {
    let token = buffer
        .strip_suffix('.')
        .unwrap_or(buffer)
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("");

    if token.is_empty() {
        return false;
    }
    if token.contains('.') {
        return true;
    }

    let mut letters = token.chars();
    match (letters.next(), letters.next(), letters.next()) {
        (Some(single), None, _) => single.is_alphabetic(),
        (Some(first), Some(second), None) => first.is_uppercase() && second.is_lowercase(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str) -> Vec<String> {
        RuleSegmenter.segment(text)
    }

    #[test]
    fn test_splits_basic_sentences() {
        let sentences = segment("Hello world. This is a test. Final sentence.");
        assert_eq!(
            sentences,
            vec!["Hello world.", "This is a test.", "Final sentence."]
        );
    }

    #[test]
    fn test_question_and_exclamation_boundaries() {
        let sentences = segment("Is this working? Yes it is! Great news everyone.");
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn test_whitespace_runs_are_collapsed() {
        let sentences = segment("Hello   world.\n\nNext    sentence here.");
        assert_eq!(sentences, vec!["Hello world.", "Next sentence here."]);
    }

    #[test]
    fn test_digit_group_separators_are_stripped() {
        let sentences = segment("Revenue grew to 1,234 units last year.");
        assert_eq!(sentences, vec!["Revenue grew to 1 234 units last year."]);
    }

    #[test]
    fn test_decimal_points_do_not_split() {
        let sentences = segment("Pi is roughly 3.14 in most contexts.");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_dotted_abbreviations_do_not_split() {
        let sentences = segment("Some gases, e.g. argon, are inert. They rarely react.");
        assert_eq!(
            sentences,
            vec!["Some gases, e.g. argon, are inert.", "They rarely react."]
        );
    }

    #[test]
    fn test_initials_and_titles_do_not_split() {
        let sentences = segment("Dr. J. Watson examined the sample. The result was clear.");
        assert_eq!(
            sentences,
            vec![
                "Dr. J. Watson examined the sample.",
                "The result was clear."
            ]
        );
    }

    #[test]
    fn test_trailing_text_without_punctuation_is_kept() {
        let sentences = segment("First sentence. And a trailing fragment");
        assert_eq!(sentences, vec!["First sentence.", "And a trailing fragment"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(segment("").is_empty());
        assert!(segment("   ").is_empty());
    }
}
