//! Battery level reporting for the header row.

pub trait BatteryGauge {
    /// Charge level in percent, 0..=100.
    fn percentage(&mut self) -> u8;
}
