use once_cell::sync::Lazy;
use regex::{CaptureMatches, Regex};

/// Optional separators, then either a run of non-digit word characters or a
/// run of digits. Anything after the last run is dropped.
static WORD_AND_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\W*(?:(?P<word>[\w--\d]+)|(?P<number>\d+))")
        .expect("word/number split pattern is valid")
});

/// What kind of run a [`Token`] ends with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    Number,
}

/// One fragment of a string produced by [`tokenize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// The whole fragment, including any separators in front of the run
    pub text: &'a str,
    /// Just the word or digit run
    pub body: &'a str,
    /// Byte offset of `text` in the tokenized string
    pub start: usize,
}

impl<'a> Token<'a> {
    pub fn is_number(&self) -> bool {
        self.kind == TokenKind::Number
    }

    /// Numeric value of the fragment, if it reads as a plain decimal number.
    ///
    /// Surrounding whitespace is ignored and a directly preceding `-`, `+` or
    /// `.` becomes part of the number, so `" -12"` is `-12.0` and `".5"` is
    /// `0.5`. Any other separator, such as `"#5"`, makes the fragment
    /// non-numeric.
    pub fn number(&self) -> Option<f64> {
        if !self.is_number() {
            return None;
        }
        self.text.trim().parse().ok()
    }

    /// Magnitude of the fragment with `-`, `.` and `,` read as separators
    /// rather than sign or decimal marks. Always non-negative.
    pub fn unsigned_number(&self) -> Option<f64> {
        if !self.is_number() {
            return None;
        }
        self.text
            .trim_matches(|c: char| c.is_whitespace() || matches!(c, '-' | '.' | ','))
            .parse()
            .ok()
    }

    /// Number of characters in the whole fragment
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Lazy sequence of [`Token`]s over one string. Call [`tokenize`] again to
/// restart.
pub struct Tokens<'a> {
    inner: CaptureMatches<'static, 'a>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.inner.next()?;
        let whole = caps.get(0)?;
        let (kind, body) = match caps.name("word") {
            Some(word) => (TokenKind::Word, word.as_str()),
            None => (TokenKind::Number, caps.name("number")?.as_str()),
        };

        Some(Token {
            kind,
            text: whole.as_str(),
            body,
            start: whole.start(),
        })
    }
}

/// Splits `s` into alternating word and number fragments.
///
/// Digits never share a fragment with other word characters, so `"abc2d"`
/// becomes `abc`, `2`, `d`. Separators (anything that is not a word
/// character) stay attached to the front of the fragment that follows them.
///
/// ```
/// use stringscout::compare::tokenize;
///
/// let texts: Vec<&str> = tokenize("File 10.txt").map(|t| t.text).collect();
/// assert_eq!(texts, vec!["File", " 10", ".txt"]);
/// ```
pub fn tokenize(s: &str) -> Tokens<'_> {
    let regex: &'static Regex = &WORD_AND_NUMBER;
    Tokens {
        inner: regex.captures_iter(s),
    }
}
