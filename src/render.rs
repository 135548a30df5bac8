//! Buffered row drawing.
//!
//! Screens never touch pixels row by row; they queue [`BufferedRow`]s and the
//! render pass flushes the queue in insertion order. A later entry for the
//! same row index wins visually because each row fills its background before
//! drawing text, so redraws are idempotent.

use heapless::{String, Vec};
use log::debug;

use crate::geometry::{TEXT_MARGIN_X, TEXT_MARGIN_Y, UNDERLINE_OFFSET_Y, row_position};
use crate::surface::{Color, DisplaySurface};

/// Universal UI font size used by every row unless a screen overrides it.
pub const FONT_SIZE_ALL: u8 = 2;

const ROW_TEXT_BYTES: usize = 96;
const ROW_QUEUE_CAP: usize = 48;

/// One pending row draw command.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BufferedRow {
    pub text: String<ROW_TEXT_BYTES>,
    pub row: i32,
    pub fg: Color,
    pub bg: Color,
    pub font_size: u8,
    pub underline: bool,
}

/// Ordered queue of pending row draws, emptied on every flush.
#[derive(Default)]
pub struct RowBuffer {
    queue: Vec<BufferedRow, ROW_QUEUE_CAP>,
}

impl RowBuffer {
    pub const fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queue a row. Text longer than the row capacity is truncated; a full
    /// queue drops the row rather than failing the render pass.
    pub fn push(
        &mut self,
        text: &str,
        row: i32,
        fg: Color,
        bg: Color,
        font_size: u8,
        underline: bool,
    ) {
        let mut owned: String<ROW_TEXT_BYTES> = String::new();
        for ch in text.chars() {
            if owned.push(ch).is_err() {
                break;
            }
        }

        let entry = BufferedRow {
            text: owned,
            row,
            fg,
            bg,
            font_size,
            underline,
        };
        if self.queue.push(entry).is_err() {
            debug!("row-buffer: queue full, dropping row {row}");
        }
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Draw every queued row in order, then empty the queue. Does not push
    /// pixels to the panel; the render pass owns the refresh decision.
    pub fn flush<D: DisplaySurface>(&mut self, surface: &mut D) {
        for entry in &self.queue {
            draw_row(surface, entry);
        }
        self.queue.clear();
    }
}

fn draw_row<D: DisplaySurface>(surface: &mut D, row: &BufferedRow) {
    let pos = row_position(row.row);
    surface.fill_rect(pos.x, pos.y, pos.width, pos.height, row.bg);
    surface.draw_text(
        pos.x + TEXT_MARGIN_X,
        pos.y + TEXT_MARGIN_Y,
        row.text.as_str(),
        row.fg,
        row.bg,
        row.font_size,
    );

    if row.underline {
        let width = surface.text_width(row.text.as_str());
        surface.draw_hline(
            pos.x + TEXT_MARGIN_X,
            pos.y + UNDERLINE_OFFSET_Y,
            width,
            Color::Black,
        );
    }
}

/// Draw context handed to screen routines: the row queue plus the raw surface
/// for the few screens that paint non-row graphics directly.
pub struct Frame<'a, D: DisplaySurface> {
    pub surface: &'a mut D,
    pub rows: &'a mut RowBuffer,
}

impl<D: DisplaySurface> Frame<'_, D> {
    /// Queue a black-on-white row at the universal font size.
    pub fn text_row(&mut self, text: &str, row: i32) {
        self.rows
            .push(text, row, Color::Black, Color::White, FONT_SIZE_ALL, false);
    }

    /// Queue an underlined black-on-white row, used for section titles.
    pub fn title_row(&mut self, text: &str, row: i32) {
        self.rows
            .push(text, row, Color::Black, Color::White, FONT_SIZE_ALL, true);
    }
}
