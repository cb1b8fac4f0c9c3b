//! Word tokenization and stopword filtering.
//!
//! Tokens are runs of word characters that may contain inner apostrophes or
//! hyphens (`don't`, `well-known`), or runs of punctuation. After
//! lower-casing, a token containing an apostrophe is cut at the apostrophe:
//! the tail of an English contraction (`'t`, `'s`, `'re`, ...) is always a
//! stopword. Stopwords and tokens without any alphanumeric character are
//! then dropped.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Words joined by inner apostrophes/hyphens, or punctuation runs.
const TOKEN_PATTERN: &str = r"\w+(?:['’\-]\w+)*|[^\w\s]+";

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TOKEN_PATTERN).expect("token pattern is valid"));

/// The NLTK English stopword list.
const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

static STOPWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_STOPWORDS.iter().copied().collect());

/// Splits text into raw word and punctuation tokens.
///
/// # Example
///
/// ```rust
/// use chatstats::analysis::tokenize;
///
/// let tokens = tokenize("Don't panic, it's well-known!");
/// assert_eq!(tokens, vec!["Don't", "panic", ",", "it's", "well-known", "!"]);
/// ```
pub fn tokenize(text: &str) -> Vec<&str> {
    TOKEN_REGEX.find_iter(text).map(|m| m.as_str()).collect()
}

/// Lower-cases a token and cuts it at the first apostrophe.
pub fn normalize_token(token: &str) -> String {
    let lower = token.to_lowercase();
    match lower.find(['\'', '’']) {
        Some(pos) => lower[..pos].to_string(),
        None => lower,
    }
}

/// Returns `true` if `word` (already lower-cased) is an English stopword.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// Returns `true` if the token has at least one alphanumeric character.
fn has_alphanumeric(token: &str) -> bool {
    token.chars().any(char::is_alphanumeric)
}

/// Tokenizes `text` and keeps only meaningful, normalized words.
///
/// # Example
///
/// ```rust
/// use chatstats::analysis::filter_tokens;
///
/// let words = filter_tokens("I don't think the Pizza was THAT great... pizza!");
/// assert_eq!(words, vec!["think", "pizza", "great", "pizza"]);
/// ```
pub fn filter_tokens(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .map(normalize_token)
        .filter(|word| !is_stopword(word) && has_alphanumeric(word))
        .collect()
}
