//! Row-grid UI core for a touch e-paper handheld.
//!
//! The crate owns the parts of the firmware with real invariants: the
//! row-based rendering pipeline, full/partial refresh tracking, the screen
//! navigation state machine, and touch-to-row routing. Hardware and services
//! (display push, WiFi, persisted settings, storage-backed screens, battery)
//! sit behind traits so the whole core runs on the host.

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod battery;
pub mod content;
pub mod footer;
pub mod geometry;
pub mod keyboard;
pub mod layout;
pub mod render;
pub mod settings;
pub mod surface;
pub mod wifi;

pub use app::{Screen, UiApp, UiConfig, WifiPhase};
pub use battery::BatteryGauge;
pub use content::{BrowseRequest, ContentScreens, StubContentScreens};
pub use footer::{Footer, FooterAction, FooterButton};
pub use geometry::{ROW_HEIGHT, RowPosition, SURFACE_HEIGHT, SURFACE_WIDTH};
pub use keyboard::{Key, Keyboard};
pub use layout::word_wrap;
pub use render::{BufferedRow, Frame, RowBuffer};
pub use settings::{SavedNetwork, SettingsStore};
pub use surface::{Color, DisplaySurface, TextMetrics};
pub use wifi::{Network, WifiService};
