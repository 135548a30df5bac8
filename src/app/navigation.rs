impl<D, W, S, B, V> UiApp<D, W, S, B, V>
where
    D: DisplaySurface,
    W: WifiService,
    S: SettingsStore,
    B: BatteryGauge,
    V: ContentScreens,
{
    /// Transition to a screen. Total: no transition is rejected. Entry
    /// effects: the browser forgets its pagination, the WiFi screen resets
    /// its sub-state and starts a scan. The footer button set is installed
    /// here, once per entry, not on every render.
    pub fn go_to_screen(&mut self, screen: Screen) {
        debug!("nav: screen {:?} -> {:?}", self.nav.screen, screen);
        self.nav.screen = screen;

        match screen {
            Screen::Files => self.content.reset_pagination(),
            Screen::Wifi => self.enter_wifi_screen(),
            _ => {}
        }

        self.footer.set_buttons(screen.footer_buttons());
        self.render();
    }

    /// Jump the browser to `path` and show the file listing.
    pub fn navigate_to(&mut self, path: &str) {
        debug!("nav: browse to {path}");
        self.nav.path = path_from(path);
        self.go_to_screen(Screen::Files);
    }

    /// Pop one directory level and show the file listing. At the root this
    /// is a no-op without a repaint.
    pub fn navigate_up(&mut self) {
        if self.nav.path.as_str() == "/" {
            return;
        }

        let mut trimmed = self.nav.path.as_str();
        while trimmed.len() > 1 && trimmed.ends_with('/') {
            trimmed = &trimmed[..trimmed.len() - 1];
        }

        let parent = path_from(match trimmed.rfind('/') {
            Some(last_slash) if last_slash > 0 => &trimmed[..=last_slash],
            _ => "/",
        });

        debug!("nav: browse up to {}", parent.as_str());
        self.nav.path = parent;
        self.go_to_screen(Screen::Files);
    }

    fn open_viewer(&mut self, screen: Screen, path: PathString) {
        self.nav.path = path;
        self.go_to_screen(screen);
    }
}
