use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// WCAG 2.1 conformance level for a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContrastLevel {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    /// Passes only the relaxed 3.0:1 threshold for large text.
    #[serde(rename = "AA-large")]
    AaLarge,
    #[serde(rename = "fail")]
    Fail,
}

impl ContrastLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContrastLevel::Aaa => "AAA",
            ContrastLevel::Aa => "AA",
            ContrastLevel::AaLarge => "AA-large",
            ContrastLevel::Fail => "fail",
        }
    }

    pub fn passes(&self) -> bool {
        !matches!(self, ContrastLevel::Fail)
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which thresholds a ratio clears, independent of text size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContrastPasses {
    #[serde(rename = "AA")]
    pub aa: bool,
    #[serde(rename = "AAA")]
    pub aaa: bool,
    #[serde(rename = "AALarge")]
    pub aa_large: bool,
}

/// Result of evaluating a foreground/background pair. Never stored;
/// always recomputed from the colors it describes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    /// WCAG contrast ratio in `[1, 21]`.
    pub ratio: f64,
    pub level: ContrastLevel,
    pub passes: ContrastPasses,
}

/// Repair capability tier. The billing collaborator decides which tier a
/// caller gets; the engine only cares about the role subset in scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepairTier {
    /// Repairs `text` and `primary` only.
    #[default]
    Basic,
    /// Additionally repairs `muted` and `accent`.
    Advanced,
}

impl RepairTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepairTier::Basic => "basic",
            RepairTier::Advanced => "advanced",
        }
    }
}

/// Color-vision-deficiency kind for simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CvdKind {
    #[default]
    Normal,
    /// Red-blind: missing L-cones.
    Protanopia,
    /// Green-blind: missing M-cones.
    Deuteranopia,
    /// Blue-blind: missing S-cones.
    Tritanopia,
}

impl CvdKind {
    pub const ALL: [CvdKind; 4] = [
        CvdKind::Normal,
        CvdKind::Protanopia,
        CvdKind::Deuteranopia,
        CvdKind::Tritanopia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CvdKind::Normal => "normal",
            CvdKind::Protanopia => "protanopia",
            CvdKind::Deuteranopia => "deuteranopia",
            CvdKind::Tritanopia => "tritanopia",
        }
    }
}

impl fmt::Display for CvdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CvdKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(CvdKind::Normal),
            "protanopia" => Ok(CvdKind::Protanopia),
            "deuteranopia" => Ok(CvdKind::Deuteranopia),
            "tritanopia" => Ok(CvdKind::Tritanopia),
            _ => Err(ParseError::Cvd(s.to_string())),
        }
    }
}
