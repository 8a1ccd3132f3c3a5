//! Dominant-color extraction from decoded pixels.
//!
//! Image decoding lives outside the engine; callers hand in raw RGBA
//! samples. Extraction is a fixed-iteration k-means over a strided
//! subsample, so it stays bounded and deterministic for a given input.

use tonal_model::{PaletteRole, Plch, Rgb8, Rgba8, RoleLocks};

/// Pixels with alpha below this are treated as transparent and skipped.
const MIN_ALPHA: u8 = 128;
const KMEANS_ITERATIONS: usize = 8;

#[derive(Debug, Clone, Copy)]
struct Centroid {
    r: f64,
    g: f64,
    b: f64,
}

impl Centroid {
    fn from_rgb8(rgb: Rgb8) -> Self {
        Self {
            r: f64::from(rgb.r),
            g: f64::from(rgb.g),
            b: f64::from(rgb.b),
        }
    }

    fn to_rgb8(self) -> Rgb8 {
        Rgb8 {
            r: self.r.clamp(0.0, 255.0).round() as u8,
            g: self.g.clamp(0.0, 255.0).round() as u8,
            b: self.b.clamp(0.0, 255.0).round() as u8,
        }
    }
}

fn distance_sq(a: Centroid, b: Centroid) -> f64 {
    let dr = a.r - b.r;
    let dg = a.g - b.g;
    let db = a.b - b.b;
    dr * dr + dg * dg + db * db
}

/// Stride-sample at most roughly `max_samples` opaque pixels.
fn sample_pixels(pixels: &[Rgba8], max_samples: usize) -> Vec<Rgb8> {
    if pixels.is_empty() || max_samples == 0 {
        return Vec::new();
    }
    let stride = ((pixels.len() as f64 / max_samples as f64).sqrt().floor() as usize).max(1);
    pixels
        .iter()
        .step_by(stride)
        .filter(|pixel| pixel.a >= MIN_ALPHA)
        .map(|pixel| Rgb8 {
            r: pixel.r,
            g: pixel.g,
            b: pixel.b,
        })
        .collect()
}

/// Extract up to `count` dominant colors. An empty or fully transparent
/// input yields an empty result, never an error.
pub fn extract_dominant_colors(pixels: &[Rgba8], count: usize, max_samples: usize) -> Vec<Rgb8> {
    let samples: Vec<Centroid> = sample_pixels(pixels, max_samples)
        .into_iter()
        .map(Centroid::from_rgb8)
        .collect();
    if samples.is_empty() || count == 0 {
        return Vec::new();
    }

    let centroid_count = count.min(samples.len());
    let step = (samples.len() / centroid_count).max(1);
    let mut centroids: Vec<Centroid> = (0..centroid_count)
        .map(|index| samples[(index * step) % samples.len()])
        .collect();

    for _ in 0..KMEANS_ITERATIONS {
        let mut sums = vec![(0.0f64, 0.0f64, 0.0f64, 0usize); centroid_count];

        for sample in &samples {
            let mut best_index = 0;
            let mut best_distance = f64::INFINITY;
            for (index, centroid) in centroids.iter().enumerate() {
                let next = distance_sq(*sample, *centroid);
                if next < best_distance {
                    best_distance = next;
                    best_index = index;
                }
            }
            let bucket = &mut sums[best_index];
            bucket.0 += sample.r;
            bucket.1 += sample.g;
            bucket.2 += sample.b;
            bucket.3 += 1;
        }

        for (index, (r, g, b, count)) in sums.into_iter().enumerate() {
            // Empty clusters keep their previous centroid.
            if count > 0 {
                let n = count as f64;
                centroids[index] = Centroid {
                    r: r / n,
                    g: g / n,
                    b: b / n,
                };
            }
        }
    }

    centroids.into_iter().map(Centroid::to_rgb8).collect()
}

/// Map extracted colors onto palette roles by lightness and chroma:
/// the lightest become background and surface, the darkest text, the
/// most chromatic primary and accent, and the most mid-toned low-chroma
/// color muted. Returns the mapping as locks so it composes with the
/// normal generation flow.
pub fn map_extracted_to_roles(colors: &[Plch]) -> RoleLocks {
    let mut locks = RoleLocks::new();
    if colors.is_empty() {
        return locks;
    }

    let mut by_lightness: Vec<Plch> = colors.to_vec();
    by_lightness.sort_by(|a, b| a.l.total_cmp(&b.l));
    let mut by_chroma: Vec<Plch> = colors.to_vec();
    by_chroma.sort_by(|a, b| b.c.total_cmp(&a.c));

    let background = by_lightness[by_lightness.len() - 1];
    let surface = if by_lightness.len() >= 2 {
        by_lightness[by_lightness.len() - 2]
    } else {
        background
    };
    let text = by_lightness[0];
    let primary = by_chroma[0];
    let accent = if by_chroma.len() >= 2 { by_chroma[1] } else { primary };

    let mut by_muted_score: Vec<Plch> = colors.to_vec();
    by_muted_score.sort_by(|a, b| {
        let score_a = (a.l - 0.6).abs() + a.c;
        let score_b = (b.l - 0.6).abs() + b.c;
        score_a.total_cmp(&score_b)
    });
    let muted = by_muted_score[0];

    locks.lock(PaletteRole::Background, background);
    locks.lock(PaletteRole::Surface, surface);
    locks.lock(PaletteRole::Text, text);
    locks.lock(PaletteRole::Primary, primary);
    locks.lock(PaletteRole::Accent, accent);
    locks.lock(PaletteRole::Muted, muted);
    locks
}
