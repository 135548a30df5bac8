impl<D, W, S, B, V> UiApp<D, W, S, B, V>
where
    D: DisplaySurface,
    W: WifiService,
    S: SettingsStore,
    B: BatteryGauge,
    V: ContentScreens,
{
    /// Repaint the current screen. Idempotent: the same state renders the
    /// same pixels. Every pass runs the same four steps: buffer the header,
    /// clear the content region, dispatch the active screen's draw routine,
    /// then flush rows, draw the footer, and push to the panel. The first
    /// push is a full refresh; afterwards only the content region is pushed,
    /// so header and footer pixels can go stale until the next full refresh.
    pub fn render(&mut self) {
        self.rows.clear();
        self.buffer_header();

        let region = content_region();
        self.surface
            .fill_rect(region.x, region.y, region.width, region.height, Color::White);

        if self.footer.is_empty() {
            self.footer.set_buttons(self.nav.screen.footer_buttons());
        }

        self.draw_current_screen();

        self.rows.flush(&mut self.surface);
        self.footer.draw(&mut self.surface);

        if !self.first_render_done {
            self.surface.push_full();
            self.first_render_done = true;
        } else {
            self.surface
                .push_region(region.x, region.y, region.width, region.height);
        }
    }

    fn buffer_header(&mut self) {
        let mut battery_text: String<32> = String::new();
        let _ = write!(battery_text, "Battery: {}%", self.battery.percentage());
        self.rows.push(
            battery_text.as_str(),
            BATTERY_ROW,
            Color::Black,
            Color::White,
            FONT_SIZE_ALL,
            false,
        );

        let message_text = self
            .message
            .as_ref()
            .map(|message| message.text.as_str())
            .unwrap_or("");
        self.rows.push(
            message_text,
            MESSAGE_ROW,
            Color::Black,
            Color::White,
            FONT_SIZE_ALL,
            false,
        );
    }

    fn draw_current_screen(&mut self) {
        match self.nav.screen {
            Screen::Main => self.draw_main_screen(),
            Screen::Files => {
                let Self {
                    surface,
                    rows,
                    content,
                    nav,
                    ..
                } = self;
                let mut frame = Frame { surface, rows };
                content.draw_files(&mut frame, nav.path.as_str());
            }
            Screen::TxtViewer => {
                let Self {
                    surface,
                    rows,
                    content,
                    nav,
                    ..
                } = self;
                let mut frame = Frame { surface, rows };
                content.draw_txt_viewer(&mut frame, nav.path.as_str());
            }
            Screen::ImgViewer => {
                let Self {
                    surface,
                    rows,
                    content,
                    nav,
                    ..
                } = self;
                let mut frame = Frame { surface, rows };
                content.draw_img_viewer(&mut frame, nav.path.as_str());
            }
            Screen::Off => self.draw_off_screen(),
            Screen::Clear => {}
            Screen::Wifi => self.draw_wifi_screen(),
            Screen::Apps => self.draw_apps_screen(),
            Screen::TextLangTest => self.draw_text_lang_test_screen(),
            Screen::Test2 => self.draw_test2_screen(),
            Screen::SdGateway => self.draw_sd_gateway_screen(),
        }
    }

    fn draw_main_screen(&mut self) {
        self.rows.push(
            "Menu",
            MAIN_TITLE_ROW,
            Color::Black,
            Color::White,
            FONT_SIZE_ALL,
            true,
        );
        for (index, (label, _)) in MAIN_MENU.iter().enumerate() {
            self.rows.push(
                label,
                MAIN_MENU_START_ROW + index as i32,
                Color::Black,
                Color::White,
                FONT_SIZE_ALL,
                false,
            );
        }
    }

    fn draw_off_screen(&mut self) {
        let region = content_region();
        self.surface
            .fill_rect(region.x, region.y, region.width, region.height, Color::Black);
        self.surface.draw_text(
            region.x + 10,
            region.y + region.height / 2,
            "Touch to wake",
            Color::White,
            Color::Black,
            FONT_SIZE_ALL,
        );
    }

    fn draw_apps_screen(&mut self) {
        self.rows.push(
            "Apps",
            MAIN_TITLE_ROW,
            Color::Black,
            Color::White,
            FONT_SIZE_ALL,
            true,
        );
        for (index, (label, _)) in APPS_MENU.iter().enumerate() {
            self.rows.push(
                label,
                APPS_MENU_START_ROW + index as i32,
                Color::Black,
                Color::White,
                FONT_SIZE_ALL,
                false,
            );
        }
    }

    fn draw_text_lang_test_screen(&mut self) {
        self.rows.push(
            "Font language test",
            MAIN_TITLE_ROW,
            Color::Black,
            Color::White,
            FONT_SIZE_ALL,
            true,
        );
        let samples = [
            "English: Hello",
            "Русский: Привет",
            "日本語: こんにちは",
            "Ελληνικά: Γεια σου",
        ];
        for (index, sample) in samples.iter().enumerate() {
            self.rows.push(
                sample,
                MAIN_TITLE_ROW + 1 + index as i32,
                Color::Black,
                Color::White,
                FONT_SIZE_ALL,
                false,
            );
        }
    }

    fn draw_test2_screen(&mut self) {
        self.rows.push(
            "Test2",
            5,
            Color::Black,
            Color::White,
            FONT_SIZE_ALL * 2,
            false,
        );
    }

    fn draw_sd_gateway_screen(&mut self) {
        self.rows.push(
            "SD Gateway",
            MAIN_TITLE_ROW,
            Color::Black,
            Color::White,
            FONT_SIZE_ALL,
            true,
        );

        let mut status: String<MESSAGE_BYTES> = String::new();
        match self.wifi.connected_ssid() {
            Some(ssid) => {
                let _ = write!(status, "Serving over Wi-Fi ({ssid})");
            }
            None => {
                let _ = status.push_str("Wi-Fi not connected");
            }
        }
        self.rows.push(
            status.as_str(),
            MAIN_TITLE_ROW + 1,
            Color::Black,
            Color::White,
            FONT_SIZE_ALL,
            false,
        );
    }
}
