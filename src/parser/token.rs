//! Token and mode types for the line scanner.

/// Selects which marker rules are active during scanning and which
/// record the extractor produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Task-manager lines: leading date or recurrence, buckets, windows,
    /// dependency lists.
    Todo,
    /// Time-tracker lines: leading timestamp, state markers, priorities,
    /// measured durations, remarks.
    Log,
}

/// Classification of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Free text that reached no marker rule; consecutive words collapse
    /// into one token.
    Description,
    /// `@name` project reference.
    Project,
    /// `+name` label.
    Tag,
    /// `~2h30m` estimated duration.
    Duration,
    /// `$name` bucket (todo mode).
    Bucket,
    /// `window:HH:MM-HH:MM` daily window (todo mode).
    Window,
    /// `after:1,2,3` dependency ids (todo mode).
    Dependencies,
    /// Leading `HH:MM[:SS]` or `YYYY-MM-DD HH:MM[:SS]` (log mode).
    Timestamp,
    /// `^1` through `^9` priority (log mode).
    Priority,
    /// `(2h)` measured duration (log mode).
    ExplicitDuration,
    /// `# text` trailing remark; ends the scan (log mode).
    Remark,
    /// Leading `@end` marker (log mode).
    End,
    /// Leading `@pause` marker (log mode).
    Pause,
    /// Leading `@abandon` marker (log mode).
    Abandon,
    /// Leading `@resume`, `@prev`, or `@<id>` marker (log mode).
    Resume,
    /// `->paused`, `->completed`, or `->abandoned` suffix (log mode).
    StateSuffix,
}

/// A classified, positioned piece of an input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the matched text means.
    pub kind: TokenKind,
    /// The token payload: the captured body for markers, the joined
    /// words for descriptions.
    pub value: String,
    /// Byte offset into the trimmed input where the matched text began.
    pub position: usize,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, value: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            position,
        }
    }
}
