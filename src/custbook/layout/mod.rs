//! # Document Layout
//!
//! Turns one [`Customer`](crate::model::Customer) into a [`Document`]: an
//! ordered list of fixed-size pages, each holding text lines placed at a
//! vertical offset. The result is what the PDF writer in
//! [`crate::render::pdf`] serializes; nothing here knows about PDF syntax.
//!
//! ## Flow
//!
//! ```text
//! Name                      <- title line
//! Phone: ... / Email: ... / Address: ...
//!                           <- one blank line
//! Received Items            <- heading, only if there are received entries
//!   Entry title             <- bold
//!   Date: 2024-03-01
//!   Currency: USD           <- only if tagged
//!   wrapped content lines...
//!                           <- one blank line between entries
//! Customer Details          <- heading, forced onto a new page when the
//!   ...                        cursor is near the bottom
//! ```
//!
//! ## Page Breaks
//!
//! Every single line is checked before it is placed: if it would cross
//! `height - margin_bottom`, a new page starts and the line goes at the top
//! margin. Entries are allowed to straddle pages. The only break that looks
//! ahead is the one before the details heading, which fires when less than
//! [`PageGeometry::near_bottom_threshold`] remains.
//!
//! Layout is a pure function of its inputs: same customer, same options, same
//! document.

mod engine;
pub mod geometry;
pub mod metrics;
pub mod wrap;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CustbookError;

pub use engine::layout;
pub use geometry::{PageGeometry, PageSize};
pub use metrics::Font;

pub const RECEIVED_HEADING: &str = "Received Items";
pub const DETAILS_HEADING: &str = "Customer Details";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// Customer name at the top of the first page
    Title,
    /// Section heading ("Received Items", "Customer Details")
    Heading,
    /// Entry title
    Emphasis,
    /// Contact lines, date/currency lines, entry content
    Body,
}

impl LineStyle {
    pub fn font(&self) -> Font {
        match self {
            LineStyle::Body => Font::Helvetica,
            _ => Font::HelveticaBold,
        }
    }

    pub fn font_size(&self, geometry: &PageGeometry) -> f32 {
        match self {
            LineStyle::Title => geometry.title_font_size,
            LineStyle::Heading => geometry.heading_font_size,
            LineStyle::Emphasis | LineStyle::Body => geometry.body_font_size,
        }
    }

    pub fn line_height(&self, geometry: &PageGeometry) -> f32 {
        match self {
            LineStyle::Title | LineStyle::Heading => geometry.heading_line_height,
            LineStyle::Emphasis | LineStyle::Body => geometry.line_height,
        }
    }

    pub fn measure(&self, text: &str, geometry: &PageGeometry) -> f32 {
        self.font().text_width(text, self.font_size(geometry))
    }
}

/// A line of text at a fixed position. `y` is the top of the line box,
/// measured down from the top edge of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub style: LineStyle,
    pub x: f32,
    pub y: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

impl Page {
    /// Sum of the heights of every line on the page.
    pub fn used_height(&self) -> f32 {
        self.lines.iter().map(|l| l.height).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub geometry: PageGeometry,
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn line_count(&self) -> usize {
        self.pages.iter().map(|p| p.lines.len()).sum()
    }

    /// Every line in output order, with its 0-based page number.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &PlacedLine)> {
        self.pages
            .iter()
            .enumerate()
            .flat_map(|(n, page)| page.lines.iter().map(move |line| (n, line)))
    }

    pub fn texts(&self) -> Vec<&str> {
        self.lines().map(|(_, l)| l.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    #[default]
    Iso,
    Us,
    Eu,
}

impl DateFormat {
    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::Iso => "%Y-%m-%d",
            DateFormat::Us => "%m/%d/%Y",
            DateFormat::Eu => "%d/%m/%Y",
        }
    }

    /// Formats a timestamp as a calendar date in the local time zone.
    pub fn format(&self, date: &DateTime<Utc>) -> String {
        date.with_timezone(&Local).format(self.pattern()).to_string()
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFormat::Iso => write!(f, "iso"),
            DateFormat::Us => write!(f, "us"),
            DateFormat::Eu => write!(f, "eu"),
        }
    }
}

impl FromStr for DateFormat {
    type Err = CustbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iso" => Ok(DateFormat::Iso),
            "us" => Ok(DateFormat::Us),
            "eu" => Ok(DateFormat::Eu),
            other => Err(CustbookError::Validation(format!(
                "Unsupported date format: {} (expected iso, us or eu)",
                other
            ))),
        }
    }
}

/// Inputs to a layout run besides the customer itself.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutOptions {
    pub geometry: PageGeometry,
    pub date_format: DateFormat,
}

impl LayoutOptions {
    pub fn new(page_size: PageSize, date_format: DateFormat) -> Self {
        Self {
            geometry: PageGeometry::for_size(page_size),
            date_format,
        }
    }
}
