use super::*;
use crate::content::StubContentScreens;
use crate::geometry::ROW_HEIGHT;
use crate::surface::TextMetrics;
use crate::wifi::Network;

#[derive(Default)]
struct RecordingSurface {
    full_pushes: usize,
    region_pushes: std::vec::Vec<(i32, i32, i32, i32)>,
    texts: std::vec::Vec<std::string::String>,
}

impl TextMetrics for RecordingSurface {
    fn text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * 12
    }
}

impl DisplaySurface for RecordingSurface {
    fn fill_rect(&mut self, _x: i32, _y: i32, _width: i32, _height: i32, _color: Color) {}

    fn draw_text(&mut self, _x: i32, _y: i32, text: &str, _fg: Color, _bg: Color, _size: u8) {
        self.texts.push(text.into());
    }

    fn draw_hline(&mut self, _x: i32, _y: i32, _length: i32, _color: Color) {}

    fn push_full(&mut self) {
        self.full_pushes += 1;
    }

    fn push_region(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.region_pushes.push((x, y, width, height));
    }
}

#[derive(Default)]
struct MockWifi {
    networks: std::vec::Vec<Network>,
    scanning: bool,
    scan_completed: bool,
    scans_started: usize,
    accept: bool,
    connected: Option<std::string::String>,
    attempts: std::vec::Vec<(std::string::String, std::string::String)>,
}

impl WifiService for MockWifi {
    type Error = ();

    fn start_scan(&mut self) {
        self.scans_started += 1;
        self.scanning = true;
    }

    fn is_scanning(&self) -> bool {
        self.scanning
    }

    fn networks(&self) -> &[Network] {
        &self.networks
    }

    fn connected_ssid(&self) -> Option<&str> {
        self.connected.as_deref()
    }

    fn connect(&mut self, ssid: &str, password: &str) -> Result<(), Self::Error> {
        self.attempts.push((ssid.into(), password.into()));
        if self.accept {
            self.connected = Some(ssid.into());
            Ok(())
        } else {
            Err(())
        }
    }

    fn take_scan_completed(&mut self) -> bool {
        core::mem::take(&mut self.scan_completed)
    }
}

#[derive(Default)]
struct MockSettings {
    saved: Option<SavedNetwork>,
    writes: usize,
}

impl SettingsStore for MockSettings {
    type Error = ();

    fn last_network(&self) -> Option<&SavedNetwork> {
        self.saved.as_ref()
    }

    fn remember_network(&mut self, network: &SavedNetwork) -> Result<(), Self::Error> {
        self.saved = Some(network.clone());
        self.writes += 1;
        Ok(())
    }
}

struct MockBattery(u8);

impl BatteryGauge for MockBattery {
    fn percentage(&mut self) -> u8 {
        self.0
    }
}

type TestApp = UiApp<RecordingSurface, MockWifi, MockSettings, MockBattery, StubContentScreens>;

fn scanned_networks() -> std::vec::Vec<Network> {
    vec![Network::new("Home-5G", -50), Network::new("CoffeeShop", -80)]
}

fn make_app(wifi: MockWifi, settings: MockSettings) -> TestApp {
    UiApp::new(
        RecordingSurface::default(),
        wifi,
        settings,
        MockBattery(87),
        StubContentScreens,
        UiConfig::default(),
    )
}

fn render_count(app: &TestApp) -> usize {
    app.surface.full_pushes + app.surface.region_pushes.len()
}

/// Touch point in the middle of a grid row.
fn row_touch(row: i32) -> (i32, i32) {
    (20, row * ROW_HEIGHT + ROW_HEIGHT / 2)
}

#[test]
fn first_render_is_full_then_partial_content_region() {
    let mut app = make_app(MockWifi::default(), MockSettings::default());

    app.render();
    app.render();
    app.render();

    assert_eq!(app.surface.full_pushes, 1);
    assert_eq!(app.surface.region_pushes, vec![(0, 120, 540, 780); 2]);
}

#[test]
fn footer_strip_touch_routes_to_footer_on_any_screen() {
    let mut app = make_app(MockWifi::default(), MockSettings::default());
    app.go_to_screen(Screen::SdGateway);

    // Just above the footer strip: the gateway screen ignores it.
    app.route_touch(10, 899, 0);
    assert_eq!(app.current_screen(), Screen::SdGateway);

    // Slot 0 is Home.
    app.route_touch(10, 910, 0);
    assert_eq!(app.current_screen(), Screen::Main);
}

#[test]
fn footer_slot_one_turns_the_screen_off() {
    let mut app = make_app(MockWifi::default(), MockSettings::default());

    app.route_touch(200, 930, 0);
    assert_eq!(app.current_screen(), Screen::Off);

    // Any content touch wakes back up.
    let (x, y) = row_touch(7);
    app.route_touch(x, y, 0);
    assert_eq!(app.current_screen(), Screen::Main);
}

#[test]
fn entering_wifi_screen_resets_sub_state_and_starts_a_scan() {
    let wifi = MockWifi {
        networks: scanned_networks(),
        ..MockWifi::default()
    };
    let mut app = make_app(wifi, MockSettings::default());

    app.go_to_screen(Screen::Wifi);
    assert_eq!(app.wifi.scans_started, 1);

    // Pick a network and type one character.
    let (x, y) = row_touch(4);
    app.route_touch(x, y, 0);
    assert_eq!(app.wifi_phase(), WifiPhase::Password);
    app.route_touch(5, 7 * ROW_HEIGHT + 5, 0); // 'a'
    assert_eq!(app.wifi_ui.password_draft.as_str(), "a");

    app.go_to_screen(Screen::Wifi);
    assert_eq!(app.wifi_phase(), WifiPhase::List);
    assert!(app.wifi_ui.selected_ssid.is_empty());
    assert!(app.wifi_ui.password_draft.is_empty());
    assert_eq!(app.wifi.scans_started, 2);
}

#[test]
fn second_network_row_selects_coffeeshop() {
    let wifi = MockWifi {
        networks: scanned_networks(),
        ..MockWifi::default()
    };
    let mut app = make_app(wifi, MockSettings::default());
    app.go_to_screen(Screen::Wifi);

    // No saved network, so the list starts at row 4; the second entry sits
    // on row 5.
    let (x, y) = row_touch(5);
    app.route_touch(x, y, 0);

    assert_eq!(app.wifi_phase(), WifiPhase::Password);
    assert_eq!(app.wifi_ui.selected_ssid.as_str(), "CoffeeShop");
}

#[test]
fn touch_beyond_the_network_list_is_ignored() {
    let wifi = MockWifi {
        networks: scanned_networks(),
        ..MockWifi::default()
    };
    let mut app = make_app(wifi, MockSettings::default());
    app.go_to_screen(Screen::Wifi);
    let renders = render_count(&app);

    let (x, y) = row_touch(6); // one past the last network
    app.route_touch(x, y, 0);

    assert_eq!(app.wifi_phase(), WifiPhase::List);
    assert_eq!(render_count(&app), renders);
}

#[test]
fn saved_network_shifts_the_list_down_one_row() {
    let wifi = MockWifi {
        networks: scanned_networks(),
        ..MockWifi::default()
    };
    let settings = MockSettings {
        saved: Some(SavedNetwork::new("Home-5G", "hunter2")),
        ..MockSettings::default()
    };
    let mut app = make_app(wifi, settings);
    app.go_to_screen(Screen::Wifi);

    // Row 5 is now the first scanned network, not the second.
    let (x, y) = row_touch(5);
    app.route_touch(x, y, 0);

    assert_eq!(app.wifi_phase(), WifiPhase::Password);
    assert_eq!(app.wifi_ui.selected_ssid.as_str(), "Home-5G");
}

#[test]
fn connect_last_row_uses_stored_credentials() {
    let wifi = MockWifi {
        networks: scanned_networks(),
        accept: true,
        ..MockWifi::default()
    };
    let settings = MockSettings {
        saved: Some(SavedNetwork::new("Home-5G", "hunter2")),
        ..MockSettings::default()
    };
    let mut app = make_app(wifi, settings);
    app.go_to_screen(Screen::Wifi);

    let (x, y) = row_touch(4);
    app.route_touch(x, y, 0);

    assert_eq!(
        app.wifi.attempts,
        vec![("Home-5G".to_string(), "hunter2".to_string())]
    );
    assert_eq!(app.current_screen(), Screen::Main);
}

#[test]
fn failed_connect_reverts_to_list_with_a_message() {
    let wifi = MockWifi {
        networks: scanned_networks(),
        accept: false,
        ..MockWifi::default()
    };
    let mut app = make_app(wifi, MockSettings::default());
    app.go_to_screen(Screen::Wifi);

    let (x, y) = row_touch(4);
    app.route_touch(x, y, 0);
    app.route_touch(5, 7 * ROW_HEIGHT + 5, 0); // 'a'
    app.route_touch(54 * 8 + 5, 9 * ROW_HEIGHT + 5, 0); // enter

    assert_eq!(app.wifi_phase(), WifiPhase::List);
    assert_eq!(app.message_text(), Some("Connection failed"));
    assert_eq!(app.current_screen(), Screen::Wifi);
}

#[test]
fn successful_connect_persists_credentials_and_goes_home() {
    let wifi = MockWifi {
        networks: scanned_networks(),
        accept: true,
        ..MockWifi::default()
    };
    let mut app = make_app(wifi, MockSettings::default());
    app.go_to_screen(Screen::Wifi);

    let (x, y) = row_touch(5);
    app.route_touch(x, y, 0);
    app.route_touch(5, 7 * ROW_HEIGHT + 5, 0); // 'a'
    app.route_touch(5, 7 * ROW_HEIGHT + 5, 0); // 'a'
    app.route_touch(54 * 8 + 5, 9 * ROW_HEIGHT + 5, 0); // enter

    assert_eq!(app.current_screen(), Screen::Main);
    assert_eq!(app.settings.writes, 1);
    let saved = app.settings.saved.clone().unwrap();
    assert_eq!(saved.ssid.as_str(), "CoffeeShop");
    assert_eq!(saved.password.as_str(), "aa");
}

#[test]
fn backspace_and_layout_toggle_stay_in_password_phase() {
    let wifi = MockWifi {
        networks: scanned_networks(),
        ..MockWifi::default()
    };
    let mut app = make_app(wifi, MockSettings::default());
    app.go_to_screen(Screen::Wifi);

    let (x, y) = row_touch(4);
    app.route_touch(x, y, 0);
    app.route_touch(5, 7 * ROW_HEIGHT + 5, 0); // 'a'
    app.route_touch(5, 9 * ROW_HEIGHT + 5, 0); // layout toggle
    app.route_touch(5, 7 * ROW_HEIGHT + 5, 0); // 'A'
    app.route_touch(54 * 7 + 5, 9 * ROW_HEIGHT + 5, 0); // backspace

    assert_eq!(app.wifi_phase(), WifiPhase::Password);
    assert_eq!(app.wifi_ui.password_draft.as_str(), "a");
}

#[test]
fn message_expires_after_the_configured_window() {
    let mut app = make_app(MockWifi::default(), MockSettings::default());

    app.display_message("Connected", 0);
    app.tick(500);
    assert_eq!(app.message_text(), Some("Connected"));

    app.tick(1_200);
    assert_eq!(app.message_text(), None);
}

#[test]
fn scan_completion_repaints_only_while_wifi_is_current() {
    let mut app = make_app(MockWifi::default(), MockSettings::default());
    app.render();
    let renders = render_count(&app);

    app.wifi.scan_completed = true;
    app.tick(0);
    assert_eq!(render_count(&app), renders);

    app.go_to_screen(Screen::Wifi);
    let renders = render_count(&app);
    app.wifi.scan_completed = true;
    app.tick(0);
    assert_eq!(render_count(&app), renders + 1);
}

#[test]
fn navigate_up_pops_one_directory_level() {
    let mut app = make_app(MockWifi::default(), MockSettings::default());

    app.navigate_to("/books/sci-fi/");
    assert_eq!(app.current_screen(), Screen::Files);

    app.navigate_up();
    assert_eq!(app.current_path(), "/books/");

    app.navigate_up();
    assert_eq!(app.current_path(), "/");

    let renders = render_count(&app);
    app.navigate_up();
    assert_eq!(app.current_path(), "/");
    assert_eq!(render_count(&app), renders);
}

#[test]
fn main_menu_rows_open_their_screens() {
    let mut app = make_app(MockWifi::default(), MockSettings::default());

    let (x, y) = row_touch(3);
    app.route_touch(x, y, 0);
    assert_eq!(app.current_screen(), Screen::Files);
}

#[test]
fn freeze_blocks_viewer_touches_until_toggled_back() {
    let mut app = make_app(MockWifi::default(), MockSettings::default());
    app.go_to_screen(Screen::TxtViewer);

    // Freeze sits in footer slot 2 on viewer screens.
    app.route_touch(54 * 5, 930, 0);
    assert!(app.viewer_frozen);
    assert_eq!(app.message_text(), Some("Viewer frozen"));

    app.route_touch(54 * 5, 930, 100);
    assert!(!app.viewer_frozen);
}

#[test]
fn header_shows_battery_percentage() {
    let mut app = make_app(MockWifi::default(), MockSettings::default());
    app.render();

    assert!(
        app.surface
            .texts
            .iter()
            .any(|text| text == "Battery: 87%")
    );
}
