impl<D, W, S, B, V> UiApp<D, W, S, B, V>
where
    D: DisplaySurface,
    W: WifiService,
    S: SettingsStore,
    B: BatteryGauge,
    V: ContentScreens,
{
    /// Route a raw touch. The footer strip is checked first, independent of
    /// the current screen; everything else goes to the active screen's
    /// handler. Touches that hit nothing are ignored without a repaint.
    pub fn route_touch(&mut self, x: i32, y: i32, now_ms: u64) {
        if x < 0 || x >= SURFACE_WIDTH || y < 0 || y >= SURFACE_HEIGHT {
            return;
        }

        if row_at(y) >= FOOTER_ROW {
            let slot = crate::footer::slot_at(x);
            debug!("touch: footer slot {slot}");
            if let Some(action) = self.footer.action_at(slot) {
                self.apply_footer_action(action, now_ms);
            }
            return;
        }

        match self.nav.screen {
            Screen::Main => self.handle_menu_touch(&MAIN_MENU, MAIN_MENU_START_ROW, y),
            Screen::Apps => self.handle_menu_touch(&APPS_MENU, APPS_MENU_START_ROW, y),
            Screen::Files => self.handle_files_touch(x, y),
            Screen::TxtViewer | Screen::ImgViewer => self.handle_viewer_touch(x, y),
            Screen::Off | Screen::Clear => self.go_to_screen(Screen::Main),
            Screen::Wifi => self.handle_wifi_touch(x, y, now_ms),
            Screen::TextLangTest | Screen::Test2 | Screen::SdGateway => {}
        }
    }

    fn apply_footer_action(&mut self, action: FooterAction, now_ms: u64) {
        debug!("touch: footer action {action:?}");
        match action {
            FooterAction::Home => self.go_to_screen(Screen::Main),
            FooterAction::Off => self.go_to_screen(Screen::Off),
            FooterAction::Refresh => {
                if self.nav.screen == Screen::Wifi {
                    self.wifi.start_scan();
                }
                self.render();
            }
            FooterAction::Files => self.go_to_screen(Screen::Files),
            FooterAction::Freeze => {
                self.viewer_frozen = !self.viewer_frozen;
                let text = if self.viewer_frozen {
                    "Viewer frozen"
                } else {
                    "Viewer unfrozen"
                };
                self.display_message(text, now_ms);
            }
        }
    }

    fn handle_menu_touch(&mut self, menu: &[(&str, Screen)], start_row: i32, y: i32) {
        let index = row_at(y) - start_row;
        if index < 0 || index as usize >= menu.len() {
            return;
        }
        self.go_to_screen(menu[index as usize].1);
    }

    fn handle_files_touch(&mut self, x: i32, y: i32) {
        let request = {
            let Self { content, nav, .. } = self;
            content.files_touch(x, y, nav.path.as_str())
        };

        match request {
            Some(BrowseRequest::OpenDir(path)) => self.navigate_to(path.as_str()),
            Some(BrowseRequest::OpenText(path)) => self.open_viewer(Screen::TxtViewer, path),
            Some(BrowseRequest::OpenImage(path)) => self.open_viewer(Screen::ImgViewer, path),
            Some(BrowseRequest::Up) => self.navigate_up(),
            None => {}
        }
    }

    fn handle_viewer_touch(&mut self, x: i32, y: i32) {
        if self.viewer_frozen {
            return;
        }

        let repaint = {
            let Self { content, nav, .. } = self;
            content.viewer_touch(x, y, nav.path.as_str())
        };
        if repaint {
            self.render();
        }
    }
}
