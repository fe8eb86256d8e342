//! Status queries
//!
//! This module contains helpers for monitoring the transceiver:
//! - Current state of the radio state machine
//! - Idle detection and waiting
//! - Part identification
//!
//! There is no timeout at this layer. `wait_idle` spins until the radio
//! leaves its busy states; callers needing bounded latency must arrange it
//! themselves.

use embedded_hal::delay::DelayNs;

use crate::{
    bus::Bus,
    registers::{PartNum, TrxState, TrxStatus, RF233_PART_NUM, SR_TRX_STATUS},
    Device, Error,
};

impl<BUS, DELAY> Device<BUS, DELAY>
where
    BUS: Bus,
    DELAY: DelayNs,
{
    /// Returns the current transceiver state.
    ///
    /// # Errors
    /// * `Error::Bus` - SPI communication failed
    /// * `Error::Deserialization` - TRX_STATUS held a reserved state code
    pub fn trx_state(&mut self) -> Result<TrxState, Error<BUS::Error>> {
        let status: TrxStatus = self.read_register()?;
        Ok(status.state)
    }

    /// Returns true unless the radio is receiving, transmitting or in a
    /// state transition.
    ///
    /// Reserved state codes count as idle.
    pub fn is_idle(&mut self) -> Result<bool, Error<BUS::Error>> {
        let code = self.read_subregister(SR_TRX_STATUS)?;
        Ok(TrxState::from_byte(code).map_or(true, |state| !state.is_busy()))
    }

    /// Polls TRX_STATUS until the radio is idle.
    pub fn wait_idle(&mut self) -> Result<(), Error<BUS::Error>> {
        while !self.is_idle()? {}
        Ok(())
    }

    /// Reads the part number.
    pub fn part_number(&mut self) -> Result<u8, Error<BUS::Error>> {
        let part: PartNum = self.read_register()?;
        Ok(part.value)
    }

    /// Checks that an AT86RF233 answers on the bus.
    ///
    /// # Errors
    /// * `Error::UnknownPart` - PART_NUM is not 0x0B
    /// * `Error::Bus` - SPI communication failed
    pub fn probe(&mut self) -> Result<(), Error<BUS::Error>> {
        match self.part_number()? {
            RF233_PART_NUM => Ok(()),
            other => {
                #[cfg(feature = "defmt")]
                defmt::warn!("rf233: unexpected part number 0x{=u8:02x}", other);

                Err(Error::UnknownPart(other))
            }
        }
    }
}
