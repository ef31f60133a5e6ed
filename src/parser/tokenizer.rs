//! Mode-gated lexical scanner.
//!
//! The scanner walks the trimmed line left to right. At each word start
//! it tries an ordered list of marker rules — shared markers first, then
//! the markers of the active mode — and otherwise accumulates the word
//! into a pending description buffer. The buffer is flushed as a single
//! `Description` token whenever a marker matches, so interleaved text
//! like `fix login @backend then deploy` yields two description tokens.
//!
//! Rule order resolves overlapping shapes: the two-component duration
//! form is listed before the one-component forms inside the duration
//! alternation, and a marker body that fails its rule falls through to
//! plain text rather than erroring (`~2.5h` is title text).
//!
//! Log mode runs a prefix scan before the main loop: an optional leading
//! timestamp, then at most one state or resume marker. Both require a
//! following word boundary, so `@ender` stays a project reference and
//! `12:30pm` stays title text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::TasklineError;
use crate::parser::token::{Mode, Token, TokenKind};

static PROJECT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^@([A-Za-z][A-Za-z0-9_-]*)")
        .unwrap_or_else(|e| panic!("Invalid project regex: {e}"))
});

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+([A-Za-z][A-Za-z0-9_-]*)")
        .unwrap_or_else(|e| panic!("Invalid tag regex: {e}"))
});

static DURATION_MARKER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // Longest alternative first: `~1h30m` must not stop at `~1h`.
    Regex::new(r"^~(\d+h\d+m|\d+h|\d+m)")
        .unwrap_or_else(|e| panic!("Invalid duration marker regex: {e}"))
});

static BUCKET_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\$([A-Za-z][A-Za-z0-9_-]*)")
        .unwrap_or_else(|e| panic!("Invalid bucket regex: {e}"))
});

static WINDOW_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^window:(\d{1,2}:\d{2}-\d{1,2}:\d{2})")
        .unwrap_or_else(|e| panic!("Invalid window regex: {e}"))
});

static DEPENDENCIES_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^after:(\d+(?:,\d+)*)")
        .unwrap_or_else(|e| panic!("Invalid dependencies regex: {e}"))
});

static PRIORITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\^([1-9])").unwrap_or_else(|e| panic!("Invalid priority regex: {e}"))
});

static EXPLICIT_DURATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\((\d+h\d+m|\d+h|\d+m)\)")
        .unwrap_or_else(|e| panic!("Invalid explicit duration regex: {e}"))
});

static REMARK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^# (.*)$").unwrap_or_else(|e| panic!("Invalid remark regex: {e}"))
});

static STATE_SUFFIX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^->(paused|completed|abandoned)")
        .unwrap_or_else(|e| panic!("Invalid state suffix regex: {e}"))
});

static TIMESTAMP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\d{4}-\d{2}-\d{2} )?\d{1,2}:\d{2}(?::\d{2})?")
        .unwrap_or_else(|e| panic!("Invalid timestamp regex: {e}"))
});

static STATE_MARKER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^@(end|pause|abandon|resume|prev|\d+)")
        .unwrap_or_else(|e| panic!("Invalid state marker regex: {e}"))
});

/// A marker rule: the pattern tried at the cursor and the token kind its
/// captured body maps to.
struct Rule {
    pattern: &'static Lazy<Regex>,
    kind: TokenKind,
}

fn rules_for(mode: Mode) -> Vec<Rule> {
    let mut rules = vec![
        Rule {
            pattern: &PROJECT_PATTERN,
            kind: TokenKind::Project,
        },
        Rule {
            pattern: &TAG_PATTERN,
            kind: TokenKind::Tag,
        },
        Rule {
            pattern: &DURATION_MARKER_PATTERN,
            kind: TokenKind::Duration,
        },
    ];

    match mode {
        Mode::Todo => rules.extend([
            Rule {
                pattern: &BUCKET_PATTERN,
                kind: TokenKind::Bucket,
            },
            Rule {
                pattern: &WINDOW_PATTERN,
                kind: TokenKind::Window,
            },
            Rule {
                pattern: &DEPENDENCIES_PATTERN,
                kind: TokenKind::Dependencies,
            },
        ]),
        Mode::Log => rules.extend([
            Rule {
                pattern: &PRIORITY_PATTERN,
                kind: TokenKind::Priority,
            },
            Rule {
                pattern: &EXPLICIT_DURATION_PATTERN,
                kind: TokenKind::ExplicitDuration,
            },
            Rule {
                pattern: &REMARK_PATTERN,
                kind: TokenKind::Remark,
            },
            Rule {
                pattern: &STATE_SUFFIX_PATTERN,
                kind: TokenKind::StateSuffix,
            },
        ]),
    }

    rules
}

/// The line scanner for one mode. Construction only selects the rule
/// list; the patterns themselves are global statics.
pub struct Tokenizer {
    mode: Mode,
    rules: Vec<Rule>,
}

impl Tokenizer {
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            rules: rules_for(mode),
        }
    }

    /// Scan a line into tokens.
    ///
    /// Unrecognized text never fails the scan; it accumulates into
    /// description tokens. Range errors (a bad hour inside a matched
    /// timestamp, say) are the extractor's concern, not the scanner's.
    ///
    /// # Errors
    ///
    /// Returns `TasklineError::Parse` when the trimmed input is empty.
    pub fn tokenize(&self, input: &str) -> Result<Vec<Token>, TasklineError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(TasklineError::Parse("empty input".to_string()));
        }

        let mut tokens = Vec::new();
        let mut cursor = 0;

        if self.mode == Mode::Log {
            cursor = scan_log_prefix(input, &mut tokens);
        }

        let mut pending = DescriptionBuffer::new();

        while cursor < input.len() {
            let rest = &input[cursor..];

            let trimmed = rest.trim_start();
            if trimmed.len() < rest.len() {
                cursor += rest.len() - trimmed.len();
                continue;
            }

            if let Some((token, length)) = self.match_rule(rest, cursor) {
                pending.flush_into(&mut tokens);
                let ends_scan = token.kind == TokenKind::Remark;
                tokens.push(token);
                cursor += length;
                if ends_scan {
                    break;
                }
                continue;
            }

            let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            pending.push(&rest[..word_end], cursor);
            cursor += word_end;
        }

        pending.flush_into(&mut tokens);
        Ok(tokens)
    }

    fn match_rule(&self, rest: &str, position: usize) -> Option<(Token, usize)> {
        for rule in &self.rules {
            if let Some(caps) = rule.pattern.captures(rest) {
                let matched = caps.get(0)?;
                let body = caps.get(1).map_or("", |m| m.as_str());
                return Some((Token::new(rule.kind, body, position), matched.end()));
            }
        }
        None
    }
}

/// Scan a line into tokens under the given mode.
///
/// # Errors
///
/// Returns `TasklineError::Parse` when the trimmed input is empty.
pub fn tokenize(input: &str, mode: Mode) -> Result<Vec<Token>, TasklineError> {
    Tokenizer::new(mode).tokenize(input)
}

/// Log-mode prefix scan: an optional leading timestamp, then at most one
/// state or resume marker. Returns the cursor where the main loop takes
/// over.
fn scan_log_prefix(input: &str, tokens: &mut Vec<Token>) -> usize {
    let mut cursor = 0;

    if let Some(matched) = TIMESTAMP_PATTERN.find(input) {
        if at_word_boundary(input, matched.end()) {
            tokens.push(Token::new(TokenKind::Timestamp, matched.as_str(), 0));
            cursor = matched.end();
        }
    }

    let rest = &input[cursor..];
    let trimmed = rest.trim_start();
    let offset = cursor + (rest.len() - trimmed.len());

    if let Some(caps) = STATE_MARKER_PATTERN.captures(trimmed) {
        if let (Some(matched), Some(body)) = (caps.get(0), caps.get(1)) {
            if at_word_boundary(input, offset + matched.end()) {
                let kind = match body.as_str() {
                    "end" => TokenKind::End,
                    "pause" => TokenKind::Pause,
                    "abandon" => TokenKind::Abandon,
                    _ => TokenKind::Resume,
                };
                tokens.push(Token::new(kind, body.as_str(), offset));
                return offset + matched.end();
            }
        }
    }

    cursor
}

fn at_word_boundary(input: &str, index: usize) -> bool {
    input[index..]
        .chars()
        .next()
        .map_or(true, char::is_whitespace)
}

/// Pending description words waiting to be flushed as one token.
struct DescriptionBuffer {
    words: Vec<String>,
    position: usize,
}

impl DescriptionBuffer {
    const fn new() -> Self {
        Self {
            words: Vec::new(),
            position: 0,
        }
    }

    fn push(&mut self, word: &str, position: usize) {
        if self.words.is_empty() {
            self.position = position;
        }
        self.words.push(word.to_string());
    }

    fn flush_into(&mut self, tokens: &mut Vec<Token>) {
        if self.words.is_empty() {
            return;
        }
        let value = self.words.join(" ");
        tokens.push(Token::new(TokenKind::Description, value, self.position));
        self.words.clear();
    }
}
