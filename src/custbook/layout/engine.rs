use tracing::debug;

use super::wrap::wrap_text;
use super::{
    DateFormat, Document, LayoutOptions, LineStyle, Page, PageGeometry, PlacedLine,
    DETAILS_HEADING, RECEIVED_HEADING,
};
use crate::model::{Customer, Entry};

/// Lays out `customer` onto pages. Total: any valid customer yields at least one page.
pub fn layout(customer: &Customer, options: &LayoutOptions) -> Document {
    let mut engine = Engine::new(options.geometry, options.date_format);

    engine.header(customer);

    if !customer.received.is_empty() {
        engine.section(RECEIVED_HEADING, &customer.received);
    }

    if !customer.details.is_empty() {
        engine.break_if_near_bottom();
        engine.section(DETAILS_HEADING, &customer.details);
    }

    let document = engine.finish();
    debug!(
        customer = %customer.id,
        pages = document.page_count(),
        lines = document.line_count(),
        "laid out customer document"
    );
    document
}

struct Engine {
    geometry: PageGeometry,
    date_format: DateFormat,
    /// Never empty; the last page receives new lines.
    pages: Vec<Page>,
    /// Top of the next line, measured from the page's top edge.
    y: f32,
}

impl Engine {
    fn new(geometry: PageGeometry, date_format: DateFormat) -> Self {
        Self {
            geometry,
            date_format,
            pages: vec![Page::default()],
            y: geometry.margin_top,
        }
    }

    fn header(&mut self, customer: &Customer) {
        self.text(&customer.name, LineStyle::Title);
        for (label, value) in customer.contact_lines() {
            self.text(&format!("{}: {}", label, value), LineStyle::Body);
        }
        self.advance(self.geometry.line_height);
    }

    fn section(&mut self, heading: &str, entries: &[Entry]) {
        self.text(heading, LineStyle::Heading);
        for entry in entries {
            self.entry(entry);
        }
    }

    fn entry(&mut self, entry: &Entry) {
        self.text(&entry.title, LineStyle::Emphasis);

        let date = self.date_format.format(&entry.date);
        self.text(&format!("Date: {}", date), LineStyle::Body);

        if let Some(currency) = entry.currency.as_deref().filter(|c| !c.is_empty()) {
            self.text(&format!("Currency: {}", currency), LineStyle::Body);
        }

        self.text(&entry.content, LineStyle::Body);
        self.advance(self.geometry.line_height);
    }

    /// Wraps `text` to the printable width and places each resulting line.
    fn text(&mut self, text: &str, style: LineStyle) {
        let geometry = self.geometry;
        let lines = wrap_text(text, geometry.printable_width(), |s| {
            style.measure(s, &geometry)
        });
        for line in lines {
            self.place(line, style);
        }
    }

    fn place(&mut self, text: String, style: LineStyle) {
        let height = style.line_height(&self.geometry);
        if self.y + height > self.geometry.bottom_limit() && !self.page_is_empty() {
            self.new_page();
        }

        let line = PlacedLine {
            text,
            style,
            x: self.geometry.margin_left,
            y: self.y,
            height,
        };
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(line);
        }
        self.y += height;
    }

    /// Vertical spacing. Never moves the cursor past the bottom limit; the next
    /// placed line takes care of breaking the page.
    fn advance(&mut self, amount: f32) {
        self.y = (self.y + amount).min(self.geometry.bottom_limit());
    }

    fn break_if_near_bottom(&mut self) {
        let headroom = self.geometry.bottom_limit() - self.y;
        if headroom < self.geometry.near_bottom_threshold && !self.page_is_empty() {
            self.new_page();
        }
    }

    fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.y = self.geometry.margin_top;
    }

    fn page_is_empty(&self) -> bool {
        self.pages.last().map_or(true, |p| p.lines.is_empty())
    }

    fn finish(self) -> Document {
        Document {
            geometry: self.geometry,
            pages: self.pages,
        }
    }
}
