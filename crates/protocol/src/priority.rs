//! Task priorities and their colour coding.
//!
//! Priorities are a closed set of three levels. Colouring is a pure,
//! total mapping so that any label (including ones that do not name a
//! known priority) resolves to some colour.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How urgent a task is.
///
/// # Examples
///
/// ```
/// use taskboard_protocol::Priority;
///
/// assert_eq!(Priority::default(), Priority::Medium);
/// assert_eq!(Priority::High.display_name(), "High");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait.
    Low,
    /// The default level for new tasks.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Returns all priorities from lowest to highest.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    /// Returns a human-readable label for the priority.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_protocol::Priority;
    ///
    /// assert_eq!(Priority::Low.display_name(), "Low");
    /// assert_eq!(Priority::Medium.display_name(), "Medium");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Parses a priority label, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for anything that is not one of the display names.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_protocol::Priority;
    ///
    /// assert_eq!(Priority::from_label("high"), Some(Priority::High));
    /// assert_eq!(Priority::from_label(" Medium "), Some(Priority::Medium));
    /// assert_eq!(Priority::from_label("urgent"), None);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::all()
            .into_iter()
            .find(|p| p.display_name().eq_ignore_ascii_case(label))
    }

    /// Returns the next priority, wrapping from `High` back to `Low`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }

    /// Returns the previous priority, wrapping from `Low` to `High`.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::Medium => Self::Low,
            Self::High => Self::Medium,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The colour a task is drawn with, derived from its priority.
///
/// This is toolkit-independent; front-ends map it onto their own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityColor {
    /// High priority.
    Red,
    /// Medium priority.
    Yellow,
    /// Low priority.
    Green,
    /// Anything that is not a recognised priority.
    Neutral,
}

/// Maps a priority onto its colour.
///
/// # Examples
///
/// ```
/// use taskboard_protocol::{Priority, PriorityColor, color_for};
///
/// assert_eq!(color_for(Priority::High), PriorityColor::Red);
/// assert_eq!(color_for(Priority::Medium), PriorityColor::Yellow);
/// assert_eq!(color_for(Priority::Low), PriorityColor::Green);
/// ```
#[must_use]
pub const fn color_for(priority: Priority) -> PriorityColor {
    match priority {
        Priority::High => PriorityColor::Red,
        Priority::Medium => PriorityColor::Yellow,
        Priority::Low => PriorityColor::Green,
    }
}

/// Maps a free-form priority label onto a colour.
///
/// Unrecognised labels get [`PriorityColor::Neutral`].
///
/// # Examples
///
/// ```
/// use taskboard_protocol::{PriorityColor, color_for_label};
///
/// assert_eq!(color_for_label("High"), PriorityColor::Red);
/// assert_eq!(color_for_label("critical"), PriorityColor::Neutral);
/// ```
#[must_use]
pub fn color_for_label(label: &str) -> PriorityColor {
    Priority::from_label(label).map_or(PriorityColor::Neutral, color_for)
}
