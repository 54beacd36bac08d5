//! Wizard step ordering.

use serde::{Deserialize, Serialize};

/// The ordered steps of the room design wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Place objects and set room dimensions.
    Layout,
    /// Pick a style, colors, and materials.
    Style,
    /// Review the design and trigger generation.
    Review,
}

impl WizardStep {
    /// Total number of steps in the wizard.
    pub const TOTAL: usize = 3;

    /// Gets the next step, or `None` at the final step.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Layout => Some(Self::Style),
            Self::Style => Some(Self::Review),
            Self::Review => None,
        }
    }

    /// Gets the previous step, or `None` at the first step.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Layout => None,
            Self::Style => Some(Self::Layout),
            Self::Review => Some(Self::Style),
        }
    }

    /// Gets the step title shown to the user.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Layout => "Room Layout",
            Self::Style => "Style Preferences",
            Self::Review => "Review & Generate",
        }
    }

    /// 1-based step number.
    #[must_use]
    pub const fn number(self) -> usize {
        match self {
            Self::Layout => 1,
            Self::Style => 2,
            Self::Review => 3,
        }
    }
}
