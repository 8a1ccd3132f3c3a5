use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Mood vocabulary for community gallery tagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodTag {
    Calm,
    Energetic,
    Professional,
    Playful,
    Elegant,
    Bold,
    Minimal,
    Vibrant,
    Warm,
    Cool,
    Neutral,
    Dark,
    Light,
}

impl MoodTag {
    pub const ALL: [MoodTag; 13] = [
        MoodTag::Calm,
        MoodTag::Energetic,
        MoodTag::Professional,
        MoodTag::Playful,
        MoodTag::Elegant,
        MoodTag::Bold,
        MoodTag::Minimal,
        MoodTag::Vibrant,
        MoodTag::Warm,
        MoodTag::Cool,
        MoodTag::Neutral,
        MoodTag::Dark,
        MoodTag::Light,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodTag::Calm => "calm",
            MoodTag::Energetic => "energetic",
            MoodTag::Professional => "professional",
            MoodTag::Playful => "playful",
            MoodTag::Elegant => "elegant",
            MoodTag::Bold => "bold",
            MoodTag::Minimal => "minimal",
            MoodTag::Vibrant => "vibrant",
            MoodTag::Warm => "warm",
            MoodTag::Cool => "cool",
            MoodTag::Neutral => "neutral",
            MoodTag::Dark => "dark",
            MoodTag::Light => "light",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoodTag::Calm => "Calm",
            MoodTag::Energetic => "Energetic",
            MoodTag::Professional => "Professional",
            MoodTag::Playful => "Playful",
            MoodTag::Elegant => "Elegant",
            MoodTag::Bold => "Bold",
            MoodTag::Minimal => "Minimal",
            MoodTag::Vibrant => "Vibrant",
            MoodTag::Warm => "Warm",
            MoodTag::Cool => "Cool",
            MoodTag::Neutral => "Neutral",
            MoodTag::Dark => "Dark",
            MoodTag::Light => "Light",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MoodTag::Calm => "Peaceful and relaxing",
            MoodTag::Energetic => "Dynamic and lively",
            MoodTag::Professional => "Business-ready",
            MoodTag::Playful => "Fun and whimsical",
            MoodTag::Elegant => "Refined and sophisticated",
            MoodTag::Bold => "Strong and impactful",
            MoodTag::Minimal => "Clean and simple",
            MoodTag::Vibrant => "Bright and colorful",
            MoodTag::Warm => "Cozy and inviting",
            MoodTag::Cool => "Fresh and crisp",
            MoodTag::Neutral => "Balanced and versatile",
            MoodTag::Dark => "Deep and moody",
            MoodTag::Light => "Airy and bright",
        }
    }
}

impl fmt::Display for MoodTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MoodTag {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        MoodTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == needle)
            .ok_or_else(|| ParseError::Mood(s.to_string()))
    }
}

/// Style vocabulary for community gallery tagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTag {
    Modern,
    Classic,
    Retro,
    Futuristic,
    Natural,
    Industrial,
    Artistic,
    Corporate,
    Casual,
    Luxury,
}

impl StyleTag {
    pub const ALL: [StyleTag; 10] = [
        StyleTag::Modern,
        StyleTag::Classic,
        StyleTag::Retro,
        StyleTag::Futuristic,
        StyleTag::Natural,
        StyleTag::Industrial,
        StyleTag::Artistic,
        StyleTag::Corporate,
        StyleTag::Casual,
        StyleTag::Luxury,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StyleTag::Modern => "modern",
            StyleTag::Classic => "classic",
            StyleTag::Retro => "retro",
            StyleTag::Futuristic => "futuristic",
            StyleTag::Natural => "natural",
            StyleTag::Industrial => "industrial",
            StyleTag::Artistic => "artistic",
            StyleTag::Corporate => "corporate",
            StyleTag::Casual => "casual",
            StyleTag::Luxury => "luxury",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StyleTag::Modern => "Modern",
            StyleTag::Classic => "Classic",
            StyleTag::Retro => "Retro",
            StyleTag::Futuristic => "Futuristic",
            StyleTag::Natural => "Natural",
            StyleTag::Industrial => "Industrial",
            StyleTag::Artistic => "Artistic",
            StyleTag::Corporate => "Corporate",
            StyleTag::Casual => "Casual",
            StyleTag::Luxury => "Luxury",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StyleTag::Modern => "Contemporary design",
            StyleTag::Classic => "Timeless appeal",
            StyleTag::Retro => "Vintage inspiration",
            StyleTag::Futuristic => "Forward-thinking",
            StyleTag::Natural => "Earth-inspired",
            StyleTag::Industrial => "Urban and raw",
            StyleTag::Artistic => "Creative expression",
            StyleTag::Corporate => "Enterprise-ready",
            StyleTag::Casual => "Relaxed and approachable",
            StyleTag::Luxury => "Premium and exclusive",
        }
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StyleTag {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        StyleTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == needle)
            .ok_or_else(|| ParseError::Style(s.to_string()))
    }
}
