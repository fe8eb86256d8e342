//! Channel and transmit power
//!
//! Both settings are bit fields of the RF registers and are changed with a
//! read-modify-write, leaving the neighbouring CCA mode and reserved bits
//! untouched.

use embedded_hal::delay::DelayNs;

use crate::{
    bus::Bus,
    registers::{CHANNEL_MAX, CHANNEL_MIN, SR_CHANNEL, SR_TX_PWR, TX_PWR_MIN},
    Device, Error,
};

impl<BUS, DELAY> Device<BUS, DELAY>
where
    BUS: Bus,
    DELAY: DelayNs,
{
    /// Selects the IEEE 802.15.4 channel.
    ///
    /// # Errors
    /// * `Error::InvalidChannel` - `channel` is not within 11..=26; nothing
    ///   is written
    /// * `Error::Bus` - SPI communication failed
    pub fn set_channel(&mut self, channel: u8) -> Result<(), Error<BUS::Error>> {
        if !(CHANNEL_MIN..=CHANNEL_MAX).contains(&channel) {
            return Err(Error::InvalidChannel(channel));
        }

        self.write_subregister(SR_CHANNEL, channel)
    }

    /// Returns the current channel.
    pub fn channel(&mut self) -> Result<u8, Error<BUS::Error>> {
        self.read_subregister(SR_CHANNEL)
    }

    /// Sets the transmit power register value.
    ///
    /// 0x00 is the highest output power (+4 dBm), 0x0F the lowest (-17 dBm).
    /// Values above 0x0F are clamped to 0x0F.
    pub fn set_tx_power(&mut self, power: u8) -> Result<(), Error<BUS::Error>> {
        self.write_subregister(SR_TX_PWR, power.min(TX_PWR_MIN))
    }

    /// Returns the transmit power register value.
    pub fn tx_power(&mut self) -> Result<u8, Error<BUS::Error>> {
        self.read_subregister(SR_TX_PWR)
    }
}
