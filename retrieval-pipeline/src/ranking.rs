use std::{cmp::Ordering, collections::HashMap};

use common::{error::AppError, storage::types::document::Document};

/// A document selected by the ranker, identified by its source path.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedDocument {
    pub path: String,
    pub score: f32,
}

pub const MAX_RANKED_DOCUMENTS: usize = 3;

/// Ranks the corpus against the query with TF-IDF weighted cosine
/// similarity and returns the top documents, best first.
///
/// The vocabulary is fitted over all document texts plus the query itself.
/// Ties break on corpus position, so for a fixed corpus and query the
/// result is exactly reproducible.
pub fn rank(query: &str, documents: &[Document]) -> Result<Vec<RankedDocument>, AppError> {
    if query.trim().is_empty() {
        return Err(AppError::EmptyQuery);
    }
    if documents.is_empty() {
        return Err(AppError::EmptyCorpus);
    }

    let mut token_lists: Vec<Vec<String>> =
        documents.iter().map(|d| tokenize(&d.text)).collect();
    token_lists.push(tokenize(query));
    if token_lists.len() < 2 {
        return Err(AppError::InsufficientCorpus);
    }

    // Column indices are assigned in encounter order, which is itself
    // deterministic; dot products below walk columns in index order so
    // repeated rankings sum in the same order.
    let mut term_columns: HashMap<String, usize> = HashMap::new();
    for tokens in &token_lists {
        for token in tokens {
            let next = term_columns.len();
            term_columns.entry(token.clone()).or_insert(next);
        }
    }
    let vocabulary_size = term_columns.len();

    let counts: Vec<Vec<f32>> = token_lists
        .iter()
        .map(|tokens| {
            let mut row = vec![0f32; vocabulary_size];
            for token in tokens {
                if let Some(&column) = term_columns.get(token) {
                    if let Some(cell) = row.get_mut(column) {
                        *cell += 1.0;
                    }
                }
            }
            row
        })
        .collect();

    let mut document_frequency = vec![0f32; vocabulary_size];
    for row in &counts {
        for (cell, df) in row.iter().zip(document_frequency.iter_mut()) {
            if *cell > 0.0 {
                *df += 1.0;
            }
        }
    }

    // Smoothed inverse document frequency: ln((1 + n) / (1 + df)) + 1.
    let total_texts = token_lists.len() as f32;
    let idf: Vec<f32> = document_frequency
        .iter()
        .map(|df| ((1.0 + total_texts) / (1.0 + df)).ln() + 1.0)
        .collect();

    let vectors: Vec<Vec<f32>> = counts
        .into_iter()
        .map(|row| l2_normalize(row.iter().zip(idf.iter()).map(|(c, w)| c * w).collect()))
        .collect();

    let Some((query_vector, document_vectors)) = vectors.split_last() else {
        return Err(AppError::InsufficientCorpus);
    };

    let mut scored: Vec<(usize, f32)> = document_vectors
        .iter()
        .enumerate()
        .map(|(position, vector)| (position, dot(query_vector, vector)))
        .collect();
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    scored.truncate(MAX_RANKED_DOCUMENTS);

    Ok(scored
        .into_iter()
        .filter_map(|(position, score)| {
            documents.get(position).map(|document| RankedDocument {
                path: document.path.clone(),
                score,
            })
        })
        .collect())
}

/// Lowercase alphanumeric runs of at least two characters, stop words
/// removed.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .filter(|word| word.chars().count() >= 2 && !is_stop_word(word))
        .collect()
}

fn l2_normalize(mut vector: Vec<f32>) -> Vec<f32> {
    let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for value in &mut vector {
            *value /= norm;
        }
    }
    vector
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

// Sorted for binary search.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his",
    "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me", "more", "most",
    "my", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our",
    "out", "over", "own", "same", "she", "should", "so", "some", "such", "than", "that", "the",
    "their", "them", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your",
];

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.binary_search(&word).is_ok()
}
