//! Persisted settings abstraction.

use heapless::String;

use crate::wifi::{PASSWORD_BYTES, SSID_BYTES};

/// Credential pair remembered after a successful connect.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SavedNetwork {
    pub ssid: String<SSID_BYTES>,
    pub password: String<PASSWORD_BYTES>,
}

impl SavedNetwork {
    pub fn new(ssid: &str, password: &str) -> Self {
        let mut network = Self::default();
        let _ = network.ssid.push_str(ssid);
        let _ = network.password.push_str(password);
        network
    }
}

/// Abstract settings persistence backend.
pub trait SettingsStore {
    type Error;

    fn last_network(&self) -> Option<&SavedNetwork>;
    fn remember_network(&mut self, network: &SavedNetwork) -> Result<(), Self::Error>;
}
