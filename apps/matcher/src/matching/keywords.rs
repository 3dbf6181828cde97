//! Keyword extraction — normalizes free text into the token vocabulary used
//! for requirement/candidate matching.

/// Tokens shorter than this are noise ("a", "of", "js").
const MIN_KEYWORD_LEN: usize = 3;

/// Tokens at least this long are high-signal on length alone.
const IMPORTANT_KEYWORD_LEN: usize = 5;

/// Filler words that carry no matching signal in requirements or CV text.
const STOPWORDS: &[&str] = &[
    "and", "the", "for", "with", "are", "you", "can", "will", "have", "must",
    "should", "years", "experience", "work", "job", "role", "position",
    "candidate", "looking", "seeking",
];

/// Punctuation that stays inside a token, so "c++", "c#", "node.js" and
/// "ci-cd" survive normalization. Everything else becomes whitespace.
const KEPT_PUNCTUATION: &[char] = &['+', '#', '.', '-'];

/// Splits `text` into normalized keywords: lower-cased, punctuation other
/// than `+ # . -` stripped to whitespace, short tokens and stopwords
/// removed. Duplicates are kept; ratio math counts every occurrence.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric()
                || c == '_'
                || c.is_whitespace()
                || KEPT_PUNCTUATION.contains(&c)
            {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|w| w.len() >= MIN_KEYWORD_LEN)
        .filter(|w| !STOPWORDS.contains(w))
        .map(str::to_owned)
        .collect()
}

/// Whether a keyword counts as high-signal: long, acronym-shaped, or
/// carrying tech-stack punctuation.
///
/// The acronym arm runs over already lower-cased tokens, so any pure-letter
/// keyword qualifies, not just upper-case ones. Matching keeps that
/// behavior.
pub fn is_important(word: &str) -> bool {
    word.len() >= IMPORTANT_KEYWORD_LEN
        || word.chars().all(|c| c.is_ascii_alphabetic())
        || word.chars().any(|c| matches!(c, '.' | '#' | '+'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let words = extract_keywords("Senior Rust Engineer (Backend)!");
        assert_eq!(words, vec!["senior", "rust", "engineer", "backend"]);
    }

    #[test]
    fn test_tech_punctuation_survives() {
        let words = extract_keywords("C++ and Node.js developer");
        assert_eq!(words, vec!["c++", "node.js", "developer"]);
    }

    #[test]
    fn test_short_tokens_dropped() {
        // "go" and "c#" fall to the length filter, two characters each
        let words = extract_keywords("Go and C# jobs");
        assert_eq!(words, vec!["jobs"]);
    }

    #[test]
    fn test_stopwords_removed() {
        let words = extract_keywords("Looking for years of experience with the role");
        assert!(words.is_empty(), "got {words:?}");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let words = extract_keywords("rust rust rust");
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn test_long_tokens_are_important() {
        assert!(is_important("kubernetes"));
        assert!(is_important("react"));
    }

    #[test]
    fn test_short_alphabetic_tokens_are_important() {
        // lower-cased input makes the acronym test match any pure-letter token
        assert!(is_important("php"));
        assert!(is_important("sql"));
    }

    #[test]
    fn test_tech_punctuation_tokens_are_important() {
        assert!(is_important("c++"));
        assert!(is_important("node.js"));
    }

    #[test]
    fn test_short_mixed_tokens_are_not_important() {
        assert!(!is_important("db2"));
        assert!(!is_important("k8s"));
    }
}
