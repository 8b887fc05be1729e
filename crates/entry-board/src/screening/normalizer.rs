/// Lowercase a single term and keep only its alphabetic characters.
pub fn normalize_term(term: &str) -> String {
    term.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Lowercase a passage, drop anything that is neither a letter nor
/// whitespace, and collapse whitespace runs into single spaces.
pub fn normalize_passage(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Word tokens of a normalized passage, in reading order.
pub fn passage_tokens(text: &str) -> Vec<String> {
    normalize_passage(text)
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
