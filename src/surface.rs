//! Display surface abstraction.

/// Two-tone e-paper palette.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    White,
    Black,
}

/// Text measurement at the universal UI font.
pub trait TextMetrics {
    fn text_width(&self, text: &str) -> i32;
}

/// Pixel sink for the row pipeline.
///
/// Drawing is infallible by contract: out-of-range coordinates and sizes are
/// accepted as given and clipped by the implementation. The core decides when
/// to push a full frame versus a partial region; the surface only executes.
pub trait DisplaySurface: TextMetrics {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);
    fn draw_text(&mut self, x: i32, y: i32, text: &str, fg: Color, bg: Color, font_size: u8);
    fn draw_hline(&mut self, x: i32, y: i32, length: i32, color: Color);
    /// Push the whole frame to the panel.
    fn push_full(&mut self);
    /// Push only the given rectangle to the panel.
    fn push_region(&mut self, x: i32, y: i32, width: i32, height: i32);
}
