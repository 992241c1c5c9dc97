//! Closed alert classification types.
//!
//! Category, severity, and status are closed enums so that transition and
//! gating logic can be checked exhaustively at compile time instead of
//! falling through a string-keyed default case.

use serde::{Deserialize, Serialize};

/// Alert categories surfaced by the planning modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertCategory {
    /// Weather conditions affecting outdoor work
    Weather,
    /// A scheduled task is due or overdue
    Task,
    /// Animal or plant health signal
    Health,
    /// A seasonal or market opportunity
    Opportunity,
}

impl AlertCategory {
    /// All categories, in canonical order.
    pub const ALL: [AlertCategory; 4] = [
        Self::Weather,
        Self::Task,
        Self::Health,
        Self::Opportunity,
    ];

    /// Get the category as a string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Weather => "weather",
            Self::Task => "task",
            Self::Health => "health",
            Self::Opportunity => "opportunity",
        }
    }

    /// Get the category from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "weather" => Some(Self::Weather),
            "task" => Some(Self::Task),
            "health" => Some(Self::Health),
            "opportunity" => Some(Self::Opportunity),
            _ => None,
        }
    }
}

impl std::fmt::Display for AlertCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Alert severity levels.
///
/// The derived ordering is the severity rank used for sorting:
/// `Important > HeadsUp > Notice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "kebab-case")]
pub enum AlertSeverity {
    /// Informational - no action required
    #[default]
    Notice = 1,
    /// Worth attention soon
    HeadsUp = 2,
    /// Action required
    Important = 3,
}

impl AlertSeverity {
    /// Get the severity rank (1-3, higher is more severe).
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Get the severity as a string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Notice => "notice",
            Self::HeadsUp => "heads-up",
            Self::Important => "important",
        }
    }

    /// Get the severity from a string.
    ///
    /// Accepts the high/medium/low synonyms some payload fields carry and
    /// normalizes them onto the same three-level ordinal.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "notice" | "low" => Some(Self::Notice),
            "heads-up" | "heads_up" | "medium" => Some(Self::HeadsUp),
            "important" | "high" => Some(Self::Important),
            _ => None,
        }
    }
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Alert lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "kebab-case")]
pub enum AlertStatus {
    /// Newly created, not yet seen
    #[default]
    New,
    /// Seen by the user
    Read,
    /// Put aside until a future expiry
    Snoozed,
    /// Closed for good; terminal
    Dismissed,
}

impl AlertStatus {
    /// Get the status as a string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Snoozed => "snoozed",
            Self::Dismissed => "dismissed",
        }
    }

    /// Get the status from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "new" => Some(Self::New),
            "read" => Some(Self::Read),
            "snoozed" => Some(Self::Snoozed),
            "dismissed" => Some(Self::Dismissed),
            _ => None,
        }
    }

    /// Whether this status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Dismissed)
    }
}

impl std::fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
