//! Fixed-capacity footer strip with labeled action slots.

use heapless::Vec;
use log::debug;

use crate::geometry::{FOOTER_ROW, FOOTER_SLOTS, SURFACE_WIDTH, row_position};
use crate::render::FONT_SIZE_ALL;
use crate::surface::{Color, DisplaySurface};

/// Maximum number of footer buttons; extra entries are silently dropped.
pub const MAX_FOOTER_BUTTONS: usize = FOOTER_SLOTS as usize;

/// What a footer slot does when tapped. Dispatch happens in the app so the
/// button table stays plain data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FooterAction {
    Home,
    Off,
    Refresh,
    Files,
    Freeze,
}

/// One footer slot. An empty label with no action is a spacer: the slot index
/// stays reserved but taps are no-ops.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FooterButton {
    pub label: &'static str,
    pub action: Option<FooterAction>,
}

impl FooterButton {
    pub const fn new(label: &'static str, action: FooterAction) -> Self {
        Self {
            label,
            action: Some(action),
        }
    }

    pub const fn spacer() -> Self {
        Self {
            label: "",
            action: None,
        }
    }
}

/// The reserved bottom strip. Order-significant, position = slot index.
pub struct Footer {
    buttons: Vec<FooterButton, MAX_FOOTER_BUTTONS>,
    visible: bool,
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub const fn new() -> Self {
        Self {
            buttons: Vec::new(),
            visible: true,
        }
    }

    /// Install a button set. At most [`MAX_FOOTER_BUTTONS`] entries are kept;
    /// the rest are dropped, matching fixed-array truncation.
    pub fn set_buttons(&mut self, buttons: &[FooterButton]) {
        self.buttons.clear();
        for button in buttons {
            if self.buttons.push(*button).is_err() {
                debug!("footer: dropping button beyond slot capacity");
                break;
            }
        }
    }

    pub fn buttons(&self) -> &[FooterButton] {
        &self.buttons
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Action bound to a slot; `None` for spacers and out-of-range indices.
    pub fn action_at(&self, slot: usize) -> Option<FooterAction> {
        self.buttons.get(slot).and_then(|button| button.action)
    }

    /// Paint the strip, or clear it when the footer is hidden.
    pub fn draw<D: DisplaySurface>(&self, surface: &mut D) {
        let pos = row_position(FOOTER_ROW);
        surface.fill_rect(pos.x, pos.y, pos.width, pos.height, Color::White);
        if !self.visible {
            return;
        }

        let slot_width = SURFACE_WIDTH / FOOTER_SLOTS;
        for (slot, button) in self.buttons.iter().enumerate() {
            if button.label.is_empty() {
                continue;
            }
            surface.draw_text(
                pos.x + slot as i32 * slot_width + 10,
                pos.y + 10,
                button.label,
                Color::Black,
                Color::White,
                FONT_SIZE_ALL,
            );
        }
    }
}

/// Footer slot under an x coordinate; the strip divides into equal slots.
pub fn slot_at(x: i32) -> usize {
    let slot_width = SURFACE_WIDTH / FOOTER_SLOTS;
    (x / slot_width).clamp(0, FOOTER_SLOTS - 1) as usize
}
