//! On-screen keyboard for password entry.
//!
//! The keyboard occupies grid rows 5..=9 with ten key columns per row. Three
//! sentinel glyphs carry the non-character keys: `~` toggles the layout, `<`
//! is backspace, `>` is enter.

use crate::geometry::{ROW_HEIGHT, SURFACE_WIDTH, TEXT_MARGIN_X, TEXT_MARGIN_Y, row_at};
use crate::render::FONT_SIZE_ALL;
use crate::surface::{Color, DisplaySurface};

/// First grid row occupied by keys.
pub const KEYBOARD_START_ROW: i32 = 5;
/// Last grid row occupied by keys.
pub const KEYBOARD_END_ROW: i32 = 9;
const KEY_COLUMNS: i32 = 10;

const ROWS_LOWER: [&str; 5] = [
    "1234567890",
    "qwertyuiop",
    "asdfghjkl_",
    "zxcvbnm.-@",
    "~!#$%&*<>",
];

const ROWS_UPPER: [&str; 5] = [
    "1234567890",
    "QWERTYUIOP",
    "ASDFGHJKL_",
    "ZXCVBNM.-@",
    "~!#$%&*<>",
];

/// Logical key produced by a keyboard touch.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
    ToggleLayout,
}

#[derive(Default, Debug, Clone, Copy)]
pub struct Keyboard {
    upper: bool,
}

impl Keyboard {
    pub const fn new() -> Self {
        Self { upper: false }
    }

    pub fn toggle_layout(&mut self) {
        self.upper = !self.upper;
    }

    pub fn reset(&mut self) {
        self.upper = false;
    }

    fn rows(&self) -> &'static [&'static str; 5] {
        if self.upper { &ROWS_UPPER } else { &ROWS_LOWER }
    }

    /// Map a touch point to a key, `None` outside the key grid.
    pub fn key_at(&self, x: i32, y: i32) -> Option<Key> {
        if x < 0 || x >= SURFACE_WIDTH {
            return None;
        }

        let row = row_at(y);
        if !(KEYBOARD_START_ROW..=KEYBOARD_END_ROW).contains(&row) {
            return None;
        }

        let column = (x / (SURFACE_WIDTH / KEY_COLUMNS)) as usize;
        let glyph = self.rows()[(row - KEYBOARD_START_ROW) as usize]
            .chars()
            .nth(column)?;

        Some(match glyph {
            '<' => Key::Backspace,
            '>' => Key::Enter,
            '~' => Key::ToggleLayout,
            ch => Key::Char(ch),
        })
    }

    /// Paint the key grid directly; keys are not row-buffer content.
    pub fn draw<D: DisplaySurface>(&self, surface: &mut D) {
        let key_width = SURFACE_WIDTH / KEY_COLUMNS;
        for (line, keys) in self.rows().iter().enumerate() {
            let y = (KEYBOARD_START_ROW + line as i32) * ROW_HEIGHT;
            for (column, glyph) in keys.chars().enumerate() {
                let mut utf8 = [0u8; 4];
                let text = glyph.encode_utf8(&mut utf8);
                surface.draw_text(
                    column as i32 * key_width + TEXT_MARGIN_X,
                    y + TEXT_MARGIN_Y,
                    text,
                    Color::Black,
                    Color::White,
                    FONT_SIZE_ALL,
                );
            }
        }
    }
}
