//! Persistence collaborators for the palette engine.
//!
//! The engine itself never touches storage. What gets persisted is a
//! palette's *generating parameters*, never the derived colors: the
//! pipeline is deterministic, so re-running it on saved parameters
//! reproduces the palette exactly.
//!
//! - **saved**: saved-palette records, the [`PaletteStore`] trait, and
//!   the JSON-file and in-memory implementations
//! - **community**: gallery record and filter types, plus the repository
//!   trait the web backend implements elsewhere

pub mod community;
pub mod error;
pub mod saved;

pub use community::{
    matches_filter, Author, CommunityPalette, GalleryFilter, GalleryRepository, MemoryGallery,
    PaletteStats, PaletteTags, SortOrder,
};
pub use error::{Result, StoreError};
pub use saved::{JsonFileStore, MemoryStore, PaletteStore, SavedPalette, StoreLimits};
