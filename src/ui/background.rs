//! Precomputed sky gradient.
//!
//! The sky blends between two blues from the top of the screen to the
//! bottom. The per-row colors are computed once at startup and looked up
//! at draw time, never recomputed per frame.

use crate::constants::SCREEN_HEIGHT;
use ratatui::style::Color;

const SKY_TOP: (u8, u8, u8) = (135, 206, 235);
const SKY_BOTTOM: (u8, u8, u8) = (135, 206, 250);

/// One color per virtual screen row.
pub struct Background {
    rows: Vec<Color>,
}

impl Background {
    pub fn new() -> Self {
        let height = SCREEN_HEIGHT as usize;
        let rows = (0..height)
            .map(|y| {
                let t = y as f64 / height as f64;
                Color::Rgb(
                    blend(SKY_TOP.0, SKY_BOTTOM.0, t),
                    blend(SKY_TOP.1, SKY_BOTTOM.1, t),
                    blend(SKY_TOP.2, SKY_BOTTOM.2, t),
                )
            })
            .collect();
        Self { rows }
    }

    /// Sky color for a virtual y coordinate. Out-of-range rows clamp to the
    /// nearest edge color.
    pub fn color_at(&self, virtual_y: f64) -> Color {
        let idx = (virtual_y.max(0.0) as usize).min(self.rows.len() - 1);
        self.rows[idx]
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::new()
    }
}

fn blend(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 * (1.0 - t) + b as f64 * t) as u8
}
