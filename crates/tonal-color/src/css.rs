//! CSS `oklch()` serialization.

use tonal_model::Plch;

/// Full-precision CSS form, e.g. `oklch(62% 0.11 240)`. Lightness is a
/// percentage; chroma and hue print at full float precision.
pub fn to_css(color: Plch) -> String {
    format!("oklch({}% {} {})", color.l * 100.0, color.c, color.h)
}

/// Display form with the stable token formatting: integer-rounded percent
/// lightness, 3-decimal chroma, integer-rounded hue. Exported files depend
/// on this exact shape.
pub fn to_css_rounded(color: Plch) -> String {
    format!(
        "oklch({}% {:.3} {})",
        (color.l * 100.0).round() as i64,
        color.c,
        color.h.round() as i64
    )
}
