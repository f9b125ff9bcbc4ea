use crate::models::WordWeight;
use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

lazy_static! {
    static ref STOPWORDS: HashSet<&'static str> = [
        "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
        "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
        "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down",
        "during", "each", "else", "ever", "few", "for", "from", "further", "get", "had", "has",
        "have", "having", "he", "her", "here", "hers", "herself", "him", "himself", "his",
        "how", "however", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
        "more", "most", "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only",
        "or", "other", "otherwise", "ought", "our", "ours", "ourselves", "out", "over", "own",
        "same", "shall", "she", "should", "since", "so", "some", "such", "than", "that", "the",
        "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this",
        "those", "through", "to", "too", "under", "until", "up", "very", "was", "we", "were",
        "what", "when", "where", "which", "while", "who", "whom", "why", "with", "would",
        "you", "your", "yours", "yourself", "yourselves", "www", "http", "https", "com",
        "don't", "can't", "won't", "isn't", "it's", "i'm", "you're", "that's", "i've",
    ]
    .into_iter()
    .collect();
}

fn normalise(token: &str) -> Option<String> {
    let word = token.trim_matches('\'').to_lowercase();
    let word = word.strip_suffix("'s").map(str::to_string).unwrap_or(word);

    if word.chars().count() < 2
        || word.chars().all(|c| c.is_numeric())
        || STOPWORDS.contains(word.as_str())
    {
        return None;
    }
    Some(word)
}

/// Most frequent words across all comments, highest count first. Ties are
/// broken alphabetically so the cloud is stable between reloads.
pub fn word_frequencies(comments: &[String], limit: usize) -> Vec<WordWeight> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for comment in comments {
        for token in comment.split(|c: char| !(c.is_alphanumeric() || c == '\'')) {
            if let Some(word) = normalise(token) {
                *counts.entry(word).or_insert(0) += 1;
            }
        }
    }

    let mut weights: Vec<WordWeight> = counts
        .into_iter()
        .map(|(word, count)| WordWeight { word, count })
        .collect();
    weights.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    weights.truncate(limit);
    weights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comments(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert!(word_frequencies(&[], 60).is_empty());
        assert!(word_frequencies(&comments(&["", "   ", "the and of"]), 60).is_empty());
    }

    #[test]
    fn counts_words_case_insensitively_without_stopwords() {
        let weights = word_frequencies(
            &comments(&["Rust is great", "rust rocks!", "The borrow checker is GREAT"]),
            60,
        );
        assert_eq!(
            weights,
            vec![
                WordWeight { word: "great".to_string(), count: 2 },
                WordWeight { word: "rust".to_string(), count: 2 },
                WordWeight { word: "borrow".to_string(), count: 1 },
                WordWeight { word: "checker".to_string(), count: 1 },
                WordWeight { word: "rocks".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn drops_numbers_single_letters_and_possessives() {
        let weights = word_frequencies(&comments(&["Ferris's 2024 x demo, Ferris demo"]), 60);
        assert_eq!(
            weights,
            vec![
                WordWeight { word: "demo".to_string(), count: 2 },
                WordWeight { word: "ferris".to_string(), count: 2 },
            ]
        );
    }

    #[test]
    fn respects_the_limit() {
        let weights = word_frequencies(&comments(&["alpha beta gamma delta"]), 2);
        assert_eq!(weights.len(), 2);
    }
}
