//! Screen state machine, render pass, and touch routing.

use core::fmt::Write as _;

use heapless::String;
use log::debug;

use crate::battery::BatteryGauge;
use crate::content::{BrowseRequest, ContentScreens, PathString, path_from};
use crate::footer::{Footer, FooterAction, FooterButton};
use crate::geometry::{FOOTER_ROW, SURFACE_HEIGHT, SURFACE_WIDTH, content_region, row_at};
use crate::keyboard::{Key, Keyboard};
use crate::render::{FONT_SIZE_ALL, Frame, RowBuffer};
use crate::settings::{SavedNetwork, SettingsStore};
use crate::surface::{Color, DisplaySurface};
use crate::wifi::{PASSWORD_BYTES, SSID_BYTES, WifiService};

const MESSAGE_BYTES: usize = 96;

const BATTERY_ROW: i32 = 0;
const MESSAGE_ROW: i32 = 1;

const MAIN_TITLE_ROW: i32 = 2;
const MAIN_MENU_START_ROW: i32 = 3;
const MAIN_MENU: [(&str, Screen); 4] = [
    ("Files", Screen::Files),
    ("Wi-Fi", Screen::Wifi),
    ("Apps", Screen::Apps),
    ("SD Gateway", Screen::SdGateway),
];

const APPS_MENU_START_ROW: i32 = 3;
const APPS_MENU: [(&str, Screen); 2] = [
    ("Text Lang Test", Screen::TextLangTest),
    ("Test2", Screen::Test2),
];

const WIFI_TITLE_ROW: i32 = 2;
const WIFI_STATUS_ROW: i32 = 3;
const CONNECT_LAST_ROW: i32 = 4;
const NETWORKS_BASE_ROW: i32 = 4;

/// Logical screens. Exactly one is current; transitions go through
/// [`UiApp::go_to_screen`] and carry screen-specific entry effects.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Main,
    Files,
    Off,
    TxtViewer,
    ImgViewer,
    Clear,
    Wifi,
    Apps,
    TextLangTest,
    Test2,
    SdGateway,
}

impl Screen {
    /// Footer button set installed when this screen is entered. Defined once
    /// per screen family instead of repeated at every render site.
    pub fn footer_buttons(self) -> &'static [FooterButton] {
        const BROWSE: [FooterButton; 4] = [
            FooterButton::new("Home", FooterAction::Home),
            FooterButton::new("Off", FooterAction::Off),
            FooterButton::new("Rfrsh", FooterAction::Refresh),
            FooterButton::new("Files", FooterAction::Files),
        ];
        const VIEWER: [FooterButton; 4] = [
            FooterButton::new("Home", FooterAction::Home),
            FooterButton::new("Off", FooterAction::Off),
            FooterButton::new("Freeze", FooterAction::Freeze),
            FooterButton::new("Files", FooterAction::Files),
        ];
        const APP: [FooterButton; 4] = [
            FooterButton::new("Home", FooterAction::Home),
            FooterButton::new("Off", FooterAction::Off),
            FooterButton::spacer(),
            FooterButton::spacer(),
        ];

        match self {
            Screen::TxtViewer | Screen::ImgViewer => &VIEWER,
            Screen::TextLangTest | Screen::Test2 => &APP,
            _ => &BROWSE,
        }
    }
}

/// Transient header message shown in row 1 until it expires.
#[derive(Clone, Debug, Eq, PartialEq)]
struct Message {
    text: String<MESSAGE_BYTES>,
    timestamp_ms: u64,
}

/// Current screen plus the browse path. The path is only meaningful while
/// the browser or a viewer is current.
#[derive(Clone, Debug, Eq, PartialEq)]
struct NavigationState {
    screen: Screen,
    path: PathString,
}

/// WiFi screen phase: browsing the scan results or typing a password.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WifiPhase {
    List,
    Password,
}

/// Sub-state owned entirely by the WiFi screen; reset on every entry.
#[derive(Clone, Debug, Eq, PartialEq)]
struct WifiUiState {
    phase: WifiPhase,
    selected_ssid: String<SSID_BYTES>,
    password_draft: String<PASSWORD_BYTES>,
}

impl WifiUiState {
    const fn new() -> Self {
        Self {
            phase: WifiPhase::List,
            selected_ssid: String::new(),
            password_draft: String::new(),
        }
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Typed transition inputs for the WiFi sub-state machine.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum WifiEvent {
    NetworkSelected(usize),
    ConnectLast,
    Key(Key),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UiConfig {
    /// How long a header message stays visible before [`UiApp::tick`]
    /// clears it.
    pub message_expiry_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_expiry_ms: 1_000,
        }
    }
}

/// The UI core. Owns the row pipeline and all navigation state; hardware and
/// services are injected collaborators.
pub struct UiApp<D, W, S, B, V>
where
    D: DisplaySurface,
    W: WifiService,
    S: SettingsStore,
    B: BatteryGauge,
    V: ContentScreens,
{
    surface: D,
    wifi: W,
    settings: S,
    battery: B,
    content: V,
    config: UiConfig,
    footer: Footer,
    rows: RowBuffer,
    keyboard: Keyboard,
    nav: NavigationState,
    message: Option<Message>,
    wifi_ui: WifiUiState,
    first_render_done: bool,
    viewer_frozen: bool,
}

impl<D, W, S, B, V> UiApp<D, W, S, B, V>
where
    D: DisplaySurface,
    W: WifiService,
    S: SettingsStore,
    B: BatteryGauge,
    V: ContentScreens,
{
    pub fn new(surface: D, wifi: W, settings: S, battery: B, content: V, config: UiConfig) -> Self {
        let mut footer = Footer::new();
        footer.set_buttons(Screen::Main.footer_buttons());

        Self {
            surface,
            wifi,
            settings,
            battery,
            content,
            config,
            footer,
            rows: RowBuffer::new(),
            keyboard: Keyboard::new(),
            nav: NavigationState {
                screen: Screen::Main,
                path: path_from("/"),
            },
            message: None,
            wifi_ui: WifiUiState::new(),
            first_render_done: false,
            viewer_frozen: false,
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.nav.screen
    }

    pub fn current_path(&self) -> &str {
        self.nav.path.as_str()
    }

    pub fn wifi_phase(&self) -> WifiPhase {
        self.wifi_ui.phase
    }

    pub fn message_text(&self) -> Option<&str> {
        self.message.as_ref().map(|message| message.text.as_str())
    }

    /// Periodic housekeeping driven by the main loop: expire the header
    /// message and consume the scan-finished handoff. The repaint after a
    /// finished scan only happens while the WiFi screen is still current.
    pub fn tick(&mut self, now_ms: u64) {
        let expired = self.message.as_ref().is_some_and(|message| {
            now_ms.saturating_sub(message.timestamp_ms) > self.config.message_expiry_ms
        });
        if expired {
            self.clear_message();
        }

        if self.wifi.take_scan_completed() {
            if self.nav.screen == Screen::Wifi {
                debug!("wifi: scan finished, repainting network list");
                self.render();
            } else {
                debug!("wifi: scan finished off-screen, repaint skipped");
            }
        }
    }

    /// Show a transient message in header row 1 and repaint.
    pub fn display_message(&mut self, text: &str, now_ms: u64) {
        let mut owned: String<MESSAGE_BYTES> = String::new();
        for ch in text.chars() {
            if owned.push(ch).is_err() {
                break;
            }
        }
        self.message = Some(Message {
            text: owned,
            timestamp_ms: now_ms,
        });
        self.render();
    }

    pub fn clear_message(&mut self) {
        self.message = None;
        self.render();
    }

    /// Borrow the content screens collaborator, e.g. to feed it listings.
    pub fn with_content_mut<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut V) -> R,
    {
        f(&mut self.content)
    }
}

include!("render_pass.rs");
include!("navigation.rs");
include!("touch.rs");
include!("wifi_screen.rs");

#[cfg(test)]
mod tests;
