//! Address filter configuration

use embedded_hal::delay::DelayNs;

use crate::{
    bus::Bus,
    registers::{IEEE_ADDR_0, IEEE_ADDR_LEN, PAN_ID_0, PAN_ID_1, SHORT_ADDR_0, SHORT_ADDR_1},
    Device, Error,
};

impl<BUS, DELAY> Device<BUS, DELAY>
where
    BUS: Bus,
    DELAY: DelayNs,
{
    /// Programs the frame filter addresses.
    ///
    /// # Arguments
    /// * `pan` - PAN id
    /// * `short_addr` - 16-bit short address
    /// * `ieee_addr` - 64-bit extended address, most significant byte first.
    ///   `None` leaves the stored extended address unchanged.
    pub fn set_pan_addr(
        &mut self,
        pan: u16,
        short_addr: u16,
        ieee_addr: Option<&[u8; IEEE_ADDR_LEN]>,
    ) -> Result<(), Error<BUS::Error>> {
        let [pan_lo, pan_hi] = pan.to_le_bytes();
        self.write_register_raw(PAN_ID_0, pan_lo)?;
        self.write_register_raw(PAN_ID_1, pan_hi)?;

        let [addr_lo, addr_hi] = short_addr.to_le_bytes();
        self.write_register_raw(SHORT_ADDR_0, addr_lo)?;
        self.write_register_raw(SHORT_ADDR_1, addr_hi)?;

        if let Some(ieee_addr) = ieee_addr {
            // IEEE_ADDR_0 holds the least significant byte
            for (offset, &byte) in ieee_addr.iter().rev().enumerate() {
                self.write_register_raw(IEEE_ADDR_0 + offset as u8, byte)?;
            }
        }

        Ok(())
    }

    /// Returns the programmed PAN id.
    pub fn pan_id(&mut self) -> Result<u16, Error<BUS::Error>> {
        let lo = self.read_register_raw(PAN_ID_0)?;
        let hi = self.read_register_raw(PAN_ID_1)?;
        Ok(u16::from_le_bytes([lo, hi]))
    }
}
