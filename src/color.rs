use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: genre → Color32
// ---------------------------------------------------------------------------

/// Maps each genre of the loaded table to a distinct colour.
#[derive(Debug, Clone, Default)]
pub struct GenreColors {
    mapping: BTreeMap<String, Color32>,
}

impl GenreColors {
    /// Assign hues to genres in the order given.
    pub fn new<'a>(genres: impl IntoIterator<Item = &'a str>) -> Self {
        let genres: Vec<&str> = genres.into_iter().collect();
        let mapping = genres
            .iter()
            .zip(generate_palette(genres.len()))
            .map(|(g, c)| (g.to_string(), c))
            .collect();
        GenreColors { mapping }
    }

    /// Colour for a genre; grey for one that was not mapped.
    pub fn color_for(&self, genre: &str) -> Color32 {
        self.mapping.get(genre).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_is_distinct() {
        let colors = generate_palette(6);
        assert_eq!(colors.len(), 6);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn test_unknown_genre_is_grey() {
        let colors = GenreColors::new(["Drama", "Comedy"]);
        assert_ne!(colors.color_for("Drama"), colors.color_for("Comedy"));
        assert_eq!(colors.color_for("Western"), Color32::GRAY);
    }
}
