//! Operational configuration
//!
//! Keeps the chip configuration consistent with the driver [`Config`].
//!
//! [`Config`]: crate::device::Config

use embedded_hal::delay::DelayNs;

use crate::{
    bus::Bus,
    frame::ChecksumMode,
    registers::{TrxCtrl1, TrxCtrl1Flags},
    Device, Error,
};

impl<BUS, DELAY> Device<BUS, DELAY>
where
    BUS: Bus,
    DELAY: DelayNs,
{
    /// Sets TX_AUTO_CRC_ON to match the configured [`ChecksumMode`].
    ///
    /// Call once after reset, before the first [`transmit`](Device::transmit).
    /// The reset value of the chip matches [`ChecksumMode::ChipGenerated`].
    pub fn sync_checksum_mode(&mut self) -> Result<(), Error<BUS::Error>> {
        let mut ctrl: TrxCtrl1 = self.read_register()?;
        ctrl.flags.set(
            TrxCtrl1Flags::TX_AUTO_CRC_ON,
            self.config.checksum == ChecksumMode::ChipGenerated,
        );
        self.write_register(ctrl)
    }
}
