/// Page state definitions for tracking crawl progress
///
/// Each admitted frontier entry moves through `Pending -> Fetching` and ends
/// in one of the terminal states. Entries rejected by the dedup/budget gate
/// never enter the state machine; they only bump the gate's hit counters.
use std::fmt;

/// Represents the current state of a frontier entry in the crawl process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageState {
    // ===== Active States =====
    /// Entry has been discovered and is waiting to pass the gate
    Pending,

    /// Entry passed the gate and its page is being fetched
    Fetching,

    // ===== Terminal States =====
    /// Page was fetched and produced a page record
    Extracted,

    /// Page was fetched but had no usable content
    Skipped,

    /// Page could not be fetched (timeout, connection error, non-200)
    Failed,
}

impl PageState {
    /// Returns true if this is a terminal state (no further processing needed)
    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }

    /// Returns true if this is an active state (page may still be processed)
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Fetching)
    }

    /// Returns true if this represents a successful completion
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Extracted)
    }

    /// Returns true if the transition `self -> next` is allowed
    pub fn can_transition_to(&self, next: PageState) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Fetching)
                | (Self::Fetching, Self::Extracted)
                | (Self::Fetching, Self::Skipped)
                | (Self::Fetching, Self::Failed)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Fetching => "fetching",
            Self::Extracted => "extracted",
            Self::Skipped => "skipped",
            Self::Failed => "failed",
        }
    }

    /// Returns all possible page states
    pub fn all_states() -> [Self; 5] {
        [
            Self::Pending,
            Self::Fetching,
            Self::Extracted,
            Self::Skipped,
            Self::Failed,
        ]
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
