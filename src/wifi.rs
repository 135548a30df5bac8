//! WiFi collaborator interface.
//!
//! The network service runs outside the core; the core only starts scans,
//! reads results, and attempts connections. Scan completion crosses the one
//! asynchronous boundary in the system, so it is modeled as a single-consumer
//! handoff flag drained from the main loop instead of an arbitrary callback.

use heapless::String;

/// Maximum SSID length we carry around.
pub const SSID_BYTES: usize = 32;
/// Maximum password length accepted by the password editor.
pub const PASSWORD_BYTES: usize = 64;

/// One discovered access point.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Network {
    pub ssid: String<SSID_BYTES>,
    pub rssi: i16,
}

impl Network {
    pub fn new(ssid: &str, rssi: i16) -> Self {
        let mut owned: String<SSID_BYTES> = String::new();
        let _ = owned.push_str(ssid);
        Self { ssid: owned, rssi }
    }
}

/// Network discovery and connection service.
///
/// `connect` is synchronous from the core's point of view; the service owns
/// its own timeout. `take_scan_completed` returns true at most once per
/// finished scan: the scan task writes the flag, the render loop consumes it.
pub trait WifiService {
    type Error;

    fn start_scan(&mut self);
    fn is_scanning(&self) -> bool;
    fn networks(&self) -> &[Network];
    /// SSID of the currently connected network, if any.
    fn connected_ssid(&self) -> Option<&str>;
    fn connect(&mut self, ssid: &str, password: &str) -> Result<(), Self::Error>;
    /// Drain the "scan finished" notification. Safe to call from any screen;
    /// the caller decides whether a repaint is due.
    fn take_scan_completed(&mut self) -> bool;
}
