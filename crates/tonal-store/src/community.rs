//! Community gallery contracts.
//!
//! The real gallery lives behind a web backend; the engine side only
//! defines the record shapes, the filter semantics, and the repository
//! trait. The in-memory implementation exists for tests and for the
//! offline fallback path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tonal_model::{MoodTag, Palette, PaletteParams, StyleTag};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteTags {
    pub mood: Vec<MoodTag>,
    pub style: Vec<StyleTag>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteStats {
    pub likes: u64,
    pub saves: u64,
    pub views: u64,
}

/// A published palette. Carries both the derived colors (for gallery
/// display without re-running the pipeline) and the generating
/// parameters (so a visitor can open it in the studio).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPalette {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub author: Author,
    pub palette: Palette,
    pub parameters: PaletteParams,
    pub tags: PaletteTags,
    pub stats: PaletteStats,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Gallery sort orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Recent,
    Popular,
    Trending,
}

/// Gallery listing filter. Empty tag lists match everything; the search
/// string matches name and description case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryFilter {
    pub mood: Vec<MoodTag>,
    pub style: Vec<StyleTag>,
    pub search: Option<String>,
    pub sort: SortOrder,
}

/// Pure filter predicate, shared by every repository implementation so
/// filtering behaves identically online and offline.
pub fn matches_filter(palette: &CommunityPalette, filter: &GalleryFilter) -> bool {
    if !filter.mood.is_empty()
        && !filter.mood.iter().any(|tag| palette.tags.mood.contains(tag))
    {
        return false;
    }
    if !filter.style.is_empty()
        && !filter.style.iter().any(|tag| palette.tags.style.contains(tag))
    {
        return false;
    }
    if let Some(search) = &filter.search {
        let needle = search.trim().to_lowercase();
        if !needle.is_empty() {
            let name_hit = palette.name.to_lowercase().contains(&needle);
            let description_hit = palette
                .description
                .as_ref()
                .is_some_and(|description| description.to_lowercase().contains(&needle));
            if !name_hit && !description_hit {
                return false;
            }
        }
    }
    true
}

/// Storage contract for the gallery. The web backend implements this
/// against its database; the engine never calls it directly.
pub trait GalleryRepository {
    fn publish(&mut self, palette: CommunityPalette) -> Result<()>;
    fn list(&self, filter: &GalleryFilter) -> Result<Vec<CommunityPalette>>;
    fn get(&self, id: &str) -> Result<Option<CommunityPalette>>;
}

/// In-memory gallery used by tests and the offline fallback.
#[derive(Debug, Default)]
pub struct MemoryGallery {
    palettes: Vec<CommunityPalette>,
}

impl MemoryGallery {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GalleryRepository for MemoryGallery {
    fn publish(&mut self, palette: CommunityPalette) -> Result<()> {
        self.palettes.push(palette);
        Ok(())
    }

    fn list(&self, filter: &GalleryFilter) -> Result<Vec<CommunityPalette>> {
        let mut matches: Vec<CommunityPalette> = self
            .palettes
            .iter()
            .filter(|palette| matches_filter(palette, filter))
            .cloned()
            .collect();

        match filter.sort {
            SortOrder::Recent => matches.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOrder::Popular => matches.sort_by(|a, b| b.stats.likes.cmp(&a.stats.likes)),
            // Trending weighs recent engagement: saves and views together.
            SortOrder::Trending => matches.sort_by(|a, b| {
                (b.stats.saves + b.stats.views).cmp(&(a.stats.saves + a.stats.views))
            }),
        }

        Ok(matches)
    }

    fn get(&self, id: &str) -> Result<Option<CommunityPalette>> {
        Ok(self
            .palettes
            .iter()
            .find(|palette| palette.id == id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonal_model::Plch;

    fn sample(id: &str, name: &str, mood: Vec<MoodTag>, likes: u64) -> CommunityPalette {
        let gray = Plch::new(0.5, 0.02, 90.0);
        CommunityPalette {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            author: Author {
                id: "author-1".to_string(),
                name: "Sam".to_string(),
            },
            palette: Palette {
                background: gray,
                surface: gray,
                primary: gray,
                accent: gray,
                text: gray,
                muted: gray,
            },
            parameters: PaletteParams::default(),
            tags: PaletteTags {
                mood,
                style: Vec::new(),
            },
            stats: PaletteStats {
                likes,
                saves: 0,
                views: 0,
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let palette = sample("1", "Dawn", vec![MoodTag::Calm], 0);
        assert!(matches_filter(&palette, &GalleryFilter::default()));
    }

    #[test]
    fn mood_filter_requires_overlap() {
        let palette = sample("1", "Dawn", vec![MoodTag::Calm], 0);
        let filter = GalleryFilter {
            mood: vec![MoodTag::Bold],
            ..GalleryFilter::default()
        };
        assert!(!matches_filter(&palette, &filter));
    }

    #[test]
    fn search_is_case_insensitive() {
        let palette = sample("1", "Neon Dusk", vec![], 0);
        let filter = GalleryFilter {
            search: Some("neon".to_string()),
            ..GalleryFilter::default()
        };
        assert!(matches_filter(&palette, &filter));
    }

    #[test]
    fn popular_sort_orders_by_likes() {
        let mut gallery = MemoryGallery::new();
        gallery.publish(sample("1", "Low", vec![], 3)).expect("publish");
        gallery.publish(sample("2", "High", vec![], 9)).expect("publish");

        let filter = GalleryFilter {
            sort: SortOrder::Popular,
            ..GalleryFilter::default()
        };
        let listed = gallery.list(&filter).expect("list");
        assert_eq!(listed[0].id, "2");
    }
}
