//! File browser and viewer screens, owned by the storage layer.
//!
//! The core never reads storage. The browser and viewers draw through a
//! [`Frame`] and hand navigation intents back by value, so the core keeps
//! sole ownership of the navigation state.

use heapless::String;

use crate::render::Frame;
use crate::surface::DisplaySurface;

/// Byte capacity of a browse path.
pub const PATH_BYTES: usize = 128;

pub type PathString = String<PATH_BYTES>;

pub fn path_from(path: &str) -> PathString {
    let mut owned = PathString::new();
    let _ = owned.push_str(path);
    owned
}

/// Navigation intent raised by a browser touch.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BrowseRequest {
    OpenDir(PathString),
    OpenText(PathString),
    OpenImage(PathString),
    Up,
}

/// File listing plus text/image viewers. Each screen exposes only a draw
/// entry point and a touch handler.
pub trait ContentScreens {
    /// Forget the current listing page; called when the browser is entered.
    fn reset_pagination(&mut self);

    fn draw_files<D: DisplaySurface>(&mut self, frame: &mut Frame<'_, D>, path: &str);
    fn draw_txt_viewer<D: DisplaySurface>(&mut self, frame: &mut Frame<'_, D>, path: &str);
    fn draw_img_viewer<D: DisplaySurface>(&mut self, frame: &mut Frame<'_, D>, path: &str);

    /// Touch inside the browser content region. `None` when nothing was hit.
    fn files_touch(&mut self, x: i32, y: i32, path: &str) -> Option<BrowseRequest>;
    /// Touch inside a viewer (page turn etc.). True when a repaint is due.
    fn viewer_touch(&mut self, x: i32, y: i32, path: &str) -> bool;
}

/// No-storage placeholder used during bring-up.
#[derive(Default, Debug, Clone, Copy)]
pub struct StubContentScreens;

impl ContentScreens for StubContentScreens {
    fn reset_pagination(&mut self) {}

    fn draw_files<D: DisplaySurface>(&mut self, frame: &mut Frame<'_, D>, path: &str) {
        frame.title_row("Files", 2);
        frame.text_row(path, 3);
        frame.text_row("No storage attached", 4);
    }

    fn draw_txt_viewer<D: DisplaySurface>(&mut self, frame: &mut Frame<'_, D>, path: &str) {
        frame.text_row(path, 2);
        frame.text_row("No storage attached", 3);
    }

    fn draw_img_viewer<D: DisplaySurface>(&mut self, frame: &mut Frame<'_, D>, path: &str) {
        frame.text_row(path, 2);
        frame.text_row("No storage attached", 3);
    }

    fn files_touch(&mut self, _x: i32, _y: i32, _path: &str) -> Option<BrowseRequest> {
        None
    }

    fn viewer_touch(&mut self, _x: i32, _y: i32, _path: &str) -> bool {
        false
    }
}
