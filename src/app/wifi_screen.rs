impl<D, W, S, B, V> UiApp<D, W, S, B, V>
where
    D: DisplaySurface,
    W: WifiService,
    S: SettingsStore,
    B: BatteryGauge,
    V: ContentScreens,
{
    /// WiFi screen entry: sub-state back to the network list, keyboard back
    /// to the base layout, and a fresh scan kicked off. The scan-finished
    /// handoff is consumed in [`UiApp::tick`].
    fn enter_wifi_screen(&mut self) {
        self.wifi_ui.reset();
        self.keyboard.reset();
        self.wifi.start_scan();
    }

    /// Saved credentials usable for the "Connect Last" shortcut row.
    fn saved_network(&self) -> Option<SavedNetwork> {
        self.settings
            .last_network()
            .filter(|saved| !saved.ssid.is_empty())
            .cloned()
    }

    /// First row of the network list; one row higher when the shortcut row
    /// is present.
    fn networks_start_row(&self) -> i32 {
        if self.saved_network().is_some() {
            NETWORKS_BASE_ROW + 1
        } else {
            NETWORKS_BASE_ROW
        }
    }

    fn draw_wifi_screen(&mut self) {
        match self.wifi_ui.phase {
            WifiPhase::Password => self.draw_wifi_password(),
            WifiPhase::List => self.draw_wifi_list(),
        }
    }

    fn draw_wifi_password(&mut self) {
        let mut prompt: String<MESSAGE_BYTES> = String::new();
        let _ = write!(
            prompt,
            "Enter password for: {}",
            self.wifi_ui.selected_ssid.as_str()
        );
        self.rows.push(
            prompt.as_str(),
            WIFI_TITLE_ROW,
            Color::Black,
            Color::White,
            FONT_SIZE_ALL,
            true,
        );

        let mut entry: String<MESSAGE_BYTES> = String::new();
        let _ = write!(entry, "Password: {}", self.wifi_ui.password_draft.as_str());
        self.rows.push(
            entry.as_str(),
            WIFI_STATUS_ROW,
            Color::Black,
            Color::White,
            FONT_SIZE_ALL,
            false,
        );

        self.keyboard.draw(&mut self.surface);
    }

    fn draw_wifi_list(&mut self) {
        self.rows.push(
            "Wi-Fi Networks",
            WIFI_TITLE_ROW,
            Color::Black,
            Color::White,
            FONT_SIZE_ALL,
            true,
        );

        let mut status: String<MESSAGE_BYTES> = String::new();
        let _ = status.push_str("Status: ");
        if let Some(ssid) = self.wifi.connected_ssid() {
            let _ = write!(status, "Connected ({ssid})");
        } else if self.wifi.is_scanning() {
            let _ = status.push_str("Scanning...");
        } else {
            let _ = status.push_str("Disconnected");
        }
        self.rows.push(
            status.as_str(),
            WIFI_STATUS_ROW,
            Color::Black,
            Color::White,
            FONT_SIZE_ALL,
            false,
        );

        let list_start = if let Some(saved) = self.saved_network() {
            let mut shortcut: String<MESSAGE_BYTES> = String::new();
            let _ = write!(shortcut, "Connect Last: {}", saved.ssid.as_str());
            self.rows.push(
                shortcut.as_str(),
                CONNECT_LAST_ROW,
                Color::Black,
                Color::White,
                FONT_SIZE_ALL,
                true,
            );
            NETWORKS_BASE_ROW + 1
        } else {
            NETWORKS_BASE_ROW
        };

        let Self { rows, wifi, .. } = self;
        let networks = wifi.networks();
        if networks.is_empty() && !wifi.is_scanning() {
            rows.push(
                "No WiFi found, press Rfrsh",
                list_start,
                Color::Black,
                Color::White,
                FONT_SIZE_ALL,
                false,
            );
            return;
        }

        let visible_rows = (FOOTER_ROW - list_start) as usize;
        for (index, network) in networks.iter().take(visible_rows).enumerate() {
            let mut line: String<MESSAGE_BYTES> = String::new();
            let _ = write!(line, "{} - {} dBm", network.ssid.as_str(), network.rssi);
            rows.push(
                line.as_str(),
                list_start + index as i32,
                Color::Black,
                Color::White,
                FONT_SIZE_ALL,
                false,
            );
        }
    }

    fn handle_wifi_touch(&mut self, x: i32, y: i32, now_ms: u64) {
        match self.wifi_ui.phase {
            WifiPhase::Password => {
                if let Some(key) = self.keyboard.key_at(x, y) {
                    self.apply_wifi_event(WifiEvent::Key(key), now_ms);
                }
            }
            WifiPhase::List => {
                let row = row_at(y);
                let has_shortcut = self.saved_network().is_some();
                if has_shortcut && row == CONNECT_LAST_ROW {
                    self.apply_wifi_event(WifiEvent::ConnectLast, now_ms);
                    return;
                }

                let index = row - self.networks_start_row();
                if index >= 0 && (index as usize) < self.wifi.networks().len() {
                    self.apply_wifi_event(WifiEvent::NetworkSelected(index as usize), now_ms);
                }
            }
        }
    }

    fn apply_wifi_event(&mut self, event: WifiEvent, now_ms: u64) {
        debug!("wifi: event {event:?} in phase {:?}", self.wifi_ui.phase);
        match event {
            WifiEvent::NetworkSelected(index) => {
                let Some(network) = self.wifi.networks().get(index) else {
                    return;
                };
                self.wifi_ui.selected_ssid = network.ssid.clone();
                self.wifi_ui.password_draft.clear();
                self.wifi_ui.phase = WifiPhase::Password;
                self.keyboard.reset();
                self.render();
            }
            WifiEvent::ConnectLast => self.connect_last(now_ms),
            WifiEvent::Key(key) => self.apply_password_key(key, now_ms),
        }
    }

    fn apply_password_key(&mut self, key: Key, now_ms: u64) {
        match key {
            Key::Char(ch) => {
                let _ = self.wifi_ui.password_draft.push(ch);
                self.render();
            }
            Key::Backspace => {
                let _ = self.wifi_ui.password_draft.pop();
                self.render();
            }
            Key::ToggleLayout => {
                self.keyboard.toggle_layout();
                self.render();
            }
            Key::Enter => self.submit_password(now_ms),
        }
    }

    fn submit_password(&mut self, now_ms: u64) {
        if self.wifi_ui.selected_ssid.is_empty() || self.wifi_ui.password_draft.is_empty() {
            self.render();
            return;
        }

        let ssid = self.wifi_ui.selected_ssid.clone();
        let password = self.wifi_ui.password_draft.clone();
        self.display_message("Connecting...", now_ms);

        match self.wifi.connect(ssid.as_str(), password.as_str()) {
            Ok(()) => {
                let saved = SavedNetwork::new(ssid.as_str(), password.as_str());
                if self.settings.remember_network(&saved).is_err() {
                    debug!("settings: failed to persist credentials");
                }

                let mut text: String<MESSAGE_BYTES> = String::new();
                let _ = write!(text, "Connected to {}", ssid.as_str());
                self.display_message(text.as_str(), now_ms);
                self.go_to_screen(Screen::Main);
            }
            Err(_) => {
                self.wifi_ui.phase = WifiPhase::List;
                self.display_message("Connection failed", now_ms);
            }
        }
    }

    fn connect_last(&mut self, now_ms: u64) {
        let Some(saved) = self.saved_network() else {
            return;
        };
        if saved.password.is_empty() {
            self.display_message("Last network info missing", now_ms);
            return;
        }

        self.display_message("Connecting to last...", now_ms);
        match self
            .wifi
            .connect(saved.ssid.as_str(), saved.password.as_str())
        {
            Ok(()) => {
                let mut text: String<MESSAGE_BYTES> = String::new();
                let _ = write!(text, "Connected to {}", saved.ssid.as_str());
                self.display_message(text.as_str(), now_ms);
                self.go_to_screen(Screen::Main);
            }
            Err(_) => {
                self.display_message("Connection failed", now_ms);
            }
        }
    }
}
