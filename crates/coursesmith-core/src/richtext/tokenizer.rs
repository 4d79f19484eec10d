use coursesmith_types::word::Word;

/// Split free text into plain word tokens.
///
/// Splits on runs of whitespace and discards empty fragments, so
/// `"  a   b "` yields exactly two tokens. Every token comes back fresh:
/// empty translation list, `is_blank` false, no styles.
pub fn tokenize(input: &str) -> Vec<Word> {
    input.split_whitespace().map(Word::plain).collect()
}

/// Render a token sequence as the single string bulk mode edits.
pub fn join_words(words: &[Word]) -> String {
    words
        .iter()
        .map(|word| word.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a comma-separated translation string into trimmed, non-empty
/// entries. Repeated commas produce no empty entries.
pub fn parse_translations(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
