//! Minimal dictionary spellchecker.
//!
//! Text is split on whitespace into [`Token`]s, tokens missing from the
//! [`Dictionary`] are flagged (capitalized words get a pass), and every
//! flagged token is paired with the dictionary words one edit away.
//!
//! ```
//! use spellcheck::{spellcheck, tokenize, Dictionary};
//!
//! let dictionary = Dictionary::from_words(["The", "quick", "brown", "fox"]);
//! let result = spellcheck(&tokenize("The qick brown fox"), &dictionary);
//!
//! let misspelling = result.iter().next().unwrap();
//! assert_eq!(misspelling.token.content, "qick");
//! assert!(misspelling.suggestions.contains("quick"));
//! ```

pub mod checker;
pub mod cli;
pub mod config;
pub mod dict;
pub mod error;

pub use checker::classifier::is_misspelled;
pub use checker::dictionary::Dictionary;
pub use checker::distance::levenshtein;
pub use checker::suggestions::suggest;
pub use checker::tokenizer::{tokenize, Corpus, Span, Token};
pub use checker::{spellcheck, spellcheck_parallel, Misspelling, Report, SpellChecker};
pub use config::Config;
pub use error::{Result, SpellcheckError};
