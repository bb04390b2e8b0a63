use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

/// Logical size of the printable design area, in design-space units.
///
/// Element positions are always expressed in this coordinate system,
/// independent of on-screen zoom. Positions are clamped into
/// `[0, width] x [0, height]` rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    /// The print area used for all garments.
    pub const DEFAULT: Self = Self {
        width: 300.0,
        height: 400.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Clamp a position into the canvas bounds.
    pub fn clamp(&self, pos: Pos2) -> Pos2 {
        Pos2::new(pos.x.clamp(0.0, self.width), pos.y.clamp(0.0, self.height))
    }

    pub fn contains(&self, pos: Pos2) -> bool {
        (0.0..=self.width).contains(&pos.x) && (0.0..=self.height).contains(&pos.y)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

pub const ZOOM_MIN: u32 = 50;
pub const ZOOM_MAX: u32 = 200;
pub const ZOOM_STEP: u32 = 25;

/// On-screen zoom level as a percentage. Affects rendering scale only,
/// never the design-space coordinates stored on elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zoom {
    percent: u32,
}

impl Zoom {
    pub fn percent(&self) -> u32 {
        self.percent
    }

    /// Scale factor to apply when mapping design space to screen space.
    pub fn scale(&self) -> f32 {
        self.percent as f32 / 100.0
    }

    pub fn zoom_in(&mut self) {
        self.percent = (self.percent + ZOOM_STEP).min(ZOOM_MAX);
    }

    pub fn zoom_out(&mut self) {
        self.percent = self.percent.saturating_sub(ZOOM_STEP).max(ZOOM_MIN);
    }

    pub fn reset(&mut self) {
        self.percent = 100;
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self { percent: 100 }
    }
}

/// Garment colors offered in the canvas header.
pub const GARMENT_COLORS: [(&str, Color32); 8] = [
    ("White", Color32::WHITE),
    ("Black", Color32::BLACK),
    ("Red", Color32::from_rgb(0xFF, 0x00, 0x00)),
    ("Blue", Color32::from_rgb(0x00, 0x00, 0xFF)),
    ("Green", Color32::from_rgb(0x00, 0x80, 0x00)),
    ("Yellow", Color32::from_rgb(0xFF, 0xFF, 0x00)),
    ("Pink", Color32::from_rgb(0xFF, 0xC0, 0xCB)),
    ("Gray", Color32::from_rgb(0x80, 0x80, 0x80)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_interior_points() {
        let canvas = CanvasSize::DEFAULT;
        let pos = Pos2::new(150.0, 200.0);
        assert_eq!(canvas.clamp(pos), pos);
    }

    #[test]
    fn clamp_limits_to_bounds() {
        let canvas = CanvasSize::DEFAULT;
        assert_eq!(canvas.clamp(Pos2::new(-10.0, 500.0)), Pos2::new(0.0, 400.0));
        assert_eq!(canvas.clamp(Pos2::new(999.0, -1.0)), Pos2::new(300.0, 0.0));
    }

    #[test]
    fn zoom_respects_range_and_step() {
        let mut zoom = Zoom::default();
        assert_eq!(zoom.percent(), 100);

        for _ in 0..10 {
            zoom.zoom_in();
        }
        assert_eq!(zoom.percent(), ZOOM_MAX);

        for _ in 0..20 {
            zoom.zoom_out();
        }
        assert_eq!(zoom.percent(), ZOOM_MIN);

        zoom.reset();
        assert_eq!(zoom.scale(), 1.0);
    }
}
