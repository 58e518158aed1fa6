use crate::checker::dictionary::Dictionary;
use crate::checker::tokenizer::Token;

/// Decide whether a token should be reported as misspelled.
///
/// Empty tokens and dictionary words are fine. So is anything shaped like a
/// capitalized word (`Paris`, `I`): one ASCII uppercase letter followed only
/// by ASCII lowercase letters.
pub fn is_misspelled(token: &Token, dictionary: &Dictionary) -> bool {
    let word = token.content.as_str();

    if word.is_empty() {
        return false;
    }

    if dictionary.contains(word) {
        return false;
    }

    !is_capitalized(word)
}

fn is_capitalized(word: &str) -> bool {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => chars.all(|c| c.is_ascii_lowercase()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::tokenizer::Span;

    fn token(word: &str) -> Token {
        Token::new(word, Span::new(0, word.len()))
    }

    #[test]
    fn test_dictionary_word() {
        let dict = Dictionary::from_words(["quick"]);
        assert!(!is_misspelled(&token("quick"), &dict));
        assert!(is_misspelled(&token("qick"), &dict));
    }

    #[test]
    fn test_empty_token() {
        assert!(!is_misspelled(&token(""), &Dictionary::new()));
    }

    #[test]
    fn test_capitalized_allowance() {
        let empty = Dictionary::new();
        assert!(!is_misspelled(&token("Paris"), &empty));
        assert!(!is_misspelled(&token("I"), &empty));
        assert!(is_misspelled(&token("PARIS"), &empty));
        assert!(is_misspelled(&token("McDonald"), &empty));
        assert!(is_misspelled(&token("paris"), &empty));
    }

    #[test]
    fn test_punctuation_defeats_allowance() {
        let empty = Dictionary::new();
        assert!(is_misspelled(&token("Paris."), &empty));
        assert!(is_misspelled(&token("Hello,"), &empty));
    }

    #[test]
    fn test_non_ascii_letters() {
        let empty = Dictionary::new();
        assert!(is_misspelled(&token("Éclair"), &empty));
        assert!(is_misspelled(&token("Café"), &empty));
    }
}
