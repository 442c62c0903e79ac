//! Polyline values and the factories that produce them.

use crate::error::LineError;

/// RGBA color, each channel in `[0, 1]`.
pub type Rgba = [f32; 4];

/// Number of slots in a generated line: 1000 interleaved `(x, y)` pairs.
pub const GENERATED_LEN: usize = 2000;

/// Palette used for the lines a surface seeds itself with.
pub const SEED_COLORS: [Rgba; 2] = [[0.2, 0.3, 0.4, 1.0], [0.7, 0.1, 0.6, 1.0]];

/// A colored polyline. Points are stored flat as `[x0, y0, x1, y1, ...]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    color: Rgba,
    points: Vec<f32>,
}

impl Line {
    pub fn new(color: Rgba, points: Vec<f32>) -> Result<Line, LineError> {
        if points.len() % 2 != 0 {
            return Err(LineError::OddCoordinateCount(points.len()));
        }
        for (channel, &value) in color.iter().enumerate() {
            if !(0.0..=1.0).contains(&value) {
                return Err(LineError::ColorOutOfRange { channel, value });
            }
        }
        Ok(Line { color, points })
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn points(&self) -> &[f32] {
        &self.points
    }

    /// Vertices drawn for this line, i.e. the number of `(x, y)` pairs.
    pub fn vertex_count(&self) -> usize {
        self.points.len() / 2
    }
}

/// Builds a line with a random opaque color and random y data.
///
/// `rng` must yield values in `[0, 1)`.
pub fn random_line(rng: &mut impl FnMut() -> f64) -> Line {
    let color = [rng() as f32, rng() as f32, rng() as f32, 1.0];
    Line {
        color,
        points: random_points(rng),
    }
}

/// Builds the `index`-th line a surface is populated with at construction.
pub fn seed_line(index: usize, rng: &mut impl FnMut() -> f64) -> Line {
    Line {
        color: SEED_COLORS[index % SEED_COLORS.len()],
        points: random_points(rng),
    }
}

// x keeps the slot index (0, 2, ..., 1998), y is uniform in [-800, 800).
fn random_points(rng: &mut impl FnMut() -> f64) -> Vec<f32> {
    (0..GENERATED_LEN)
        .map(|i| {
            if i % 2 == 0 {
                i as f32
            } else {
                (rng() * 1600.0 - 800.0) as f32
            }
        })
        .collect()
}
