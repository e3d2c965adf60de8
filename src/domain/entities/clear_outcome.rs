//! Result of an explicit cache clear.

/// Outcome of clearing the resolution cache.
///
/// "Nothing to clear" is deliberately distinct from a successful clear that
/// happened to remove zero entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Entries were removed.
    Cleared { items: usize },
    /// The cache was already empty.
    NothingToClear,
    /// The store rejected the operation.
    WriteFailed { reason: String },
}

impl ClearOutcome {
    pub fn success(&self) -> bool {
        matches!(self, Self::Cleared { .. })
    }

    pub fn items_cleared(&self) -> usize {
        match self {
            Self::Cleared { items } => *items,
            _ => 0,
        }
    }

    /// `0` on success, `1` for nothing to clear, `2` for a failed write.
    pub fn error_code(&self) -> u8 {
        match self {
            Self::Cleared { .. } => 0,
            Self::NothingToClear => 1,
            Self::WriteFailed { .. } => 2,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Cleared { items: 1 } => "Cleared 1 cached image URL".to_string(),
            Self::Cleared { items } => format!("Cleared {} cached image URLs", items),
            Self::NothingToClear => "There is nothing to clear".to_string(),
            Self::WriteFailed { reason } => format!("The cache could not be cleared: {}", reason),
        }
    }

    /// Stable snake_case label used in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cleared { .. } => "cleared",
            Self::NothingToClear => "nothing_to_clear",
            Self::WriteFailed { .. } => "write_failed",
        }
    }
}
