use crate::checker::dictionary::Dictionary;
use crate::checker::distance::levenshtein;
use crate::checker::tokenizer::Token;
use std::collections::BTreeSet;

/// Largest edit distance at which a dictionary word counts as a suggestion
pub const MAX_DISTANCE: usize = 1;

/// Collect every dictionary word within one edit of the token.
///
/// Scans the whole dictionary, so cost grows with dictionary size times the
/// square of the word length.
pub fn suggest(token: &Token, dictionary: &Dictionary) -> BTreeSet<String> {
    let word = token.content.as_str();
    let word_len = word.chars().count();

    let suggestions: BTreeSet<String> = dictionary
        .iter()
        // Words whose length differs by more than the threshold can never qualify
        .filter(|candidate| candidate.chars().count().abs_diff(word_len) <= MAX_DISTANCE)
        .filter(|candidate| levenshtein(word, candidate) <= MAX_DISTANCE)
        .cloned()
        .collect();

    log::trace!("{} suggestions for '{}'", suggestions.len(), word);

    suggestions
}
