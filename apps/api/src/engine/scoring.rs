/// Splits text into lower-cased word tokens. Anything that is not a letter,
/// digit or underscore is a separator.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Counts the tokens of `candidate` that also occur in `reference`.
/// Repeated tokens in `candidate` count once per occurrence.
pub fn relevance_score(candidate: &str, reference: &str) -> usize {
    let reference_tokens = tokenize(reference);
    tokenize(candidate)
        .iter()
        .filter(|t| reference_tokens.contains(t))
        .count()
}
