//! Fixed row grid over the physical surface.

/// Height of every logical row in pixels.
pub const ROW_HEIGHT: i32 = 60;
/// Physical surface width in pixels.
pub const SURFACE_WIDTH: i32 = 540;
/// Physical surface height in pixels (16 rows).
pub const SURFACE_HEIGHT: i32 = 960;

/// First content row; rows 0 and 1 are the header (battery + message).
pub const CONTENT_START_ROW: i32 = 2;
/// The footer occupies this row, split into equal touch slots.
pub const FOOTER_ROW: i32 = 15;
/// Number of footer touch slots.
pub const FOOTER_SLOTS: i32 = 4;

/// Left padding applied to row text and underlines.
pub const TEXT_MARGIN_X: i32 = 10;
/// Top padding applied to row text.
pub const TEXT_MARGIN_Y: i32 = 10;
/// Underline baseline offset from the row top.
pub const UNDERLINE_OFFSET_Y: i32 = 40;

/// Rectangle covered by one logical row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RowPosition {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Pure, total row-to-rectangle mapping. Rows beyond the visible area yield
/// valid off-screen rectangles; callers own the bounds check.
pub const fn row_position(row: i32) -> RowPosition {
    RowPosition {
        x: 0,
        y: row * ROW_HEIGHT,
        width: SURFACE_WIDTH,
        height: ROW_HEIGHT,
    }
}

/// Inverse of [`row_position`] for touch hit-testing.
pub const fn row_at(y: i32) -> i32 {
    y / ROW_HEIGHT
}

/// The rectangle between the header and the footer, used for partial refresh.
pub const fn content_region() -> RowPosition {
    let start = row_position(CONTENT_START_ROW);
    let footer = row_position(FOOTER_ROW);
    RowPosition {
        x: start.x,
        y: start.y,
        width: start.width,
        height: footer.y - start.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_map_to_sixty_pixel_bands() {
        for row in 0..32 {
            let pos = row_position(row);
            assert_eq!(pos.y, row * 60);
            assert_eq!(pos.height, 60);
            assert_eq!(pos.x, 0);
            assert_eq!(pos.width, SURFACE_WIDTH);
        }
    }

    #[test]
    fn distinct_rows_never_overlap() {
        for row in 0..31 {
            let a = row_position(row);
            let b = row_position(row + 1);
            assert_eq!(a.y + a.height, b.y);
        }
    }

    #[test]
    fn row_at_inverts_row_position() {
        for row in 0..16 {
            let pos = row_position(row);
            assert_eq!(row_at(pos.y), row);
            assert_eq!(row_at(pos.y + ROW_HEIGHT - 1), row);
        }
    }

    #[test]
    fn content_region_spans_rows_two_to_fourteen() {
        let region = content_region();
        assert_eq!(region.y, 120);
        assert_eq!(region.height, 780);
        assert_eq!(region.y + region.height, row_position(FOOTER_ROW).y);
    }
}
