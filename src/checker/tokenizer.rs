use std::cmp::Ordering;
use std::fmt;

/// Half-open byte range `[start, end)` into the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A word extracted from source text together with where it came from.
///
/// Tokens order by position first so that collections of them iterate in
/// source order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub content: String,
    pub span: Span,
}

impl Token {
    pub fn new(content: impl Into<String>, span: Span) -> Self {
        Self {
            content: content.into(),
            span,
        }
    }

    /// Slice a token out of `source`. The span must lie on char boundaries.
    fn from_source(source: &str, start: usize, end: usize) -> Self {
        Self::new(&source[start..end], Span::new(start, end))
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        self.span
            .cmp(&other.span)
            .then_with(|| self.content.cmp(&other.content))
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content)
    }
}

/// The tokens of one source text, in source order. Never holds empty tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    tokens: Vec<Token>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl FromIterator<Token> for Corpus {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().filter(|t| !t.is_empty()).collect(),
        }
    }
}

impl IntoIterator for Corpus {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// ASCII whitespace as understood by C's `isspace`, vertical tab included
fn is_delimiter(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Split `source` into every maximal run of non-whitespace characters.
///
/// Runs touching the start or end of the buffer are kept. Punctuation and
/// case are left untouched, so `"word."` yields the token `"word."`.
pub fn tokenize(source: &str) -> Corpus {
    let mut tokens = Vec::new();
    let mut run_start: Option<usize> = None;

    // Delimiters are single-byte ASCII, so every run boundary is a char boundary
    for (i, byte) in source.bytes().enumerate() {
        if is_delimiter(byte) {
            if let Some(start) = run_start.take() {
                tokens.push(Token::from_source(source, start, i));
            }
        } else if run_start.is_none() {
            run_start = Some(i);
        }
    }

    if let Some(start) = run_start {
        tokens.push(Token::from_source(source, start, source.len()));
    }

    tokens.into_iter().collect()
}
