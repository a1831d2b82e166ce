use comfy_table::Color;
use serde::{Deserialize, Serialize};

/// Whether a battery may be brought aboard in the cabin.
///
/// Codes outside of the known three are kept verbatim, so that a newer catalog
/// still loads and displays them as is.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize, derive_more::Display)]
#[serde(from = "String", into = "String")]
pub enum CarryOnStatus {
    #[display("allowed")]
    Allowed,

    /// Typically requires airline approval or a quantity limit.
    #[display("conditional")]
    Conditional,

    #[display("forbidden")]
    Forbidden,

    #[display("{_0}")]
    Other(String),
}

impl CarryOnStatus {
    /// Display label, unknown codes pass through unchanged.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Allowed => "가능",
            Self::Conditional => "조건부",
            Self::Forbidden => "불가",
            Self::Other(code) => code,
        }
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        match self {
            Self::Allowed => Color::Green,
            Self::Conditional => Color::DarkYellow,
            Self::Forbidden => Color::Red,
            Self::Other(_) => Color::Reset,
        }
    }
}

impl From<&str> for CarryOnStatus {
    fn from(code: &str) -> Self {
        match code {
            "allowed" => Self::Allowed,
            "conditional" => Self::Conditional,
            "forbidden" => Self::Forbidden,
            _ => Self::Other(code.to_owned()),
        }
    }
}

impl From<String> for CarryOnStatus {
    fn from(code: String) -> Self {
        match Self::from(code.as_str()) {
            Self::Other(_) => Self::Other(code),
            known => known,
        }
    }
}

impl From<CarryOnStatus> for String {
    fn from(status: CarryOnStatus) -> Self {
        match status {
            CarryOnStatus::Other(code) => code,
            known => known.to_string(),
        }
    }
}
