use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CustbookError;

/// Points per millimetre (PDF user space is 1/72 inch).
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Headroom, as a fraction of page height, below which the details section
/// starts on a fresh page. 50mm of a 297mm A4 page.
pub const NEAR_BOTTOM_FRACTION: f32 = 50.0 / 297.0;

pub fn mm_to_pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    /// (width, height) in points.
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (mm_to_pt(210.0), mm_to_pt(297.0)),
            PageSize::Letter => (612.0, 792.0),
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::A4 => write!(f, "a4"),
            PageSize::Letter => write!(f, "letter"),
        }
    }
}

impl FromStr for PageSize {
    type Err = CustbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" | "us-letter" => Ok(PageSize::Letter),
            other => Err(CustbookError::Validation(format!(
                "Unsupported page size: {} (expected a4 or letter)",
                other
            ))),
        }
    }
}

/// Fixed page measurements for one layout run, all in points.
///
/// Offsets are measured from the top edge of the page downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub line_height: f32,
    pub heading_line_height: f32,
    pub title_font_size: f32,
    pub heading_font_size: f32,
    pub body_font_size: f32,
    pub near_bottom_threshold: f32,
}

impl PageGeometry {
    pub fn for_size(size: PageSize) -> Self {
        let (width, height) = size.dimensions();
        let margin = mm_to_pt(20.0);
        let line_height = mm_to_pt(7.0);
        Self {
            width,
            height,
            margin_left: margin,
            margin_right: margin,
            margin_top: margin,
            margin_bottom: margin,
            line_height,
            heading_line_height: line_height * 1.5,
            title_font_size: 20.0,
            heading_font_size: 16.0,
            body_font_size: 12.0,
            near_bottom_threshold: height * NEAR_BOTTOM_FRACTION,
        }
    }

    pub fn printable_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    pub fn printable_height(&self) -> f32 {
        self.height - self.margin_top - self.margin_bottom
    }

    /// Lowest offset a line may reach.
    pub fn bottom_limit(&self) -> f32 {
        self.height - self.margin_bottom
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::for_size(PageSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_dimensions() {
        let (w, h) = PageSize::A4.dimensions();
        assert!((w - 595.28).abs() < 0.01);
        assert!((h - 841.89).abs() < 0.01);
    }

    #[test]
    fn test_threshold_scales_with_page() {
        let a4 = PageGeometry::for_size(PageSize::A4);
        let letter = PageGeometry::for_size(PageSize::Letter);
        assert!((a4.near_bottom_threshold - mm_to_pt(50.0)).abs() < 0.01);
        assert!(letter.near_bottom_threshold < a4.near_bottom_threshold);
        assert!(
            (letter.near_bottom_threshold / letter.height - NEAR_BOTTOM_FRACTION).abs() < 1e-6
        );
    }

    #[test]
    fn test_printable_area() {
        let g = PageGeometry::default();
        assert!((g.printable_width() - mm_to_pt(170.0)).abs() < 0.01);
        assert!((g.printable_height() - mm_to_pt(257.0)).abs() < 0.01);
    }
}
