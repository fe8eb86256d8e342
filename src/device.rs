//! RF233 Device Interface
//!
//! This module provides the register access protocol of the AT86RF233.
//!
//! The interface is built around the `Device<BUS, DELAY>` struct which owns a
//! [`Bus`] implementation and a delay provider and provides methods for:
//! - Reading and writing whole registers by address
//! - Reading and writing bit fields ([`Subregister`]s) inside a register
//! - Reading and writing typed `regiface` registers
//!
//! Frame buffer access lives in [`crate::frame`], and the configuration
//! helpers built on top of register access in [`crate::commands`].
//!
//! # Example
//! ```no_run
//! use rf233::{Device, SpiSession, registers::SR_CHANNEL};
//! # fn demo<SPI, CS, D>(spi: SPI, cs: CS, delay: D)
//! # where
//! #     SPI: embedded_hal::spi::SpiBus,
//! #     CS: embedded_hal::digital::OutputPin,
//! #     D: embedded_hal::delay::DelayNs,
//! # {
//! let mut device = Device::new(SpiSession::new(spi, cs), delay);
//!
//! // Select channel 15 without touching the CCA mode bits
//! let _ = device.write_subregister(SR_CHANNEL, 15);
//! # }
//! ```

use embedded_hal::delay::DelayNs;
use regiface::{FromByteArray, ReadableRegister, ToByteArray, WritableRegister};

use crate::{bus::Bus, frame::ChecksumMode, registers::Subregister, Error};

/// Register read command bits, ORed into the address byte
pub const CMD_REGISTER_READ: u8 = 0x80;

/// Register write command bits, ORed into the address byte
pub const CMD_REGISTER_WRITE: u8 = 0xC0;

/// Byte shifted out while clocking data in
pub(crate) const DUMMY_BYTE: u8 = 0xAA;

/// Guard time after opening and before closing a register access session
pub const ACCESS_GUARD_US: u32 = 3;

/// Settling time the chip needs after a register write
pub const WRITE_SETTLE_US: u32 = 20;

/// Driver configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Who provides the two FCS bytes of transmitted frames
    pub checksum: ChecksumMode,
}

/// Main device interface for the RF233 radio.
///
/// This struct is the explicit handle for one transceiver: it owns the bus
/// and the delay provider, so several simulated instances can coexist and
/// tests can substitute both.
///
/// All methods take `&mut self` and run one or more complete bus sessions.
/// Nothing here is reentrant; sharing a device between execution contexts
/// needs an external lock.
pub struct Device<BUS, DELAY> {
    pub(crate) bus: BUS,
    pub(crate) delay: DELAY,
    pub(crate) config: Config,
}

impl<BUS, DELAY> Device<BUS, DELAY> {
    /// Creates a new Device with the default [`Config`].
    ///
    /// # Arguments
    /// * `bus` - Bus session implementation, usually a [`SpiSession`](crate::SpiSession)
    /// * `delay` - Delay provider used for the register access timing
    pub fn new(bus: BUS, delay: DELAY) -> Self {
        Self::with_config(bus, delay, Config::default())
    }

    /// Creates a new Device with an explicit [`Config`].
    pub fn with_config(bus: BUS, delay: DELAY, config: Config) -> Self {
        Self { bus, delay, config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Releases the underlying bus and delay provider.
    pub fn release(self) -> (BUS, DELAY) {
        (self.bus, self.delay)
    }
}

impl<BUS, DELAY> Device<BUS, DELAY>
where
    BUS: Bus,
    DELAY: DelayNs,
{
    /// Runs `f` inside one bus session.
    ///
    /// The session is closed on every path once it was opened, including when
    /// `f` fails. An error from `f` takes precedence over a close error.
    pub(crate) fn session<T>(
        &mut self,
        f: impl FnOnce(&mut BUS, &mut DELAY) -> Result<T, BUS::Error>,
    ) -> Result<T, Error<BUS::Error>> {
        self.bus.open().map_err(Error::Bus)?;
        let result = f(&mut self.bus, &mut self.delay);
        let closed = self.bus.close();

        let value = result.map_err(Error::Bus)?;
        closed.map_err(Error::Bus)?;
        Ok(value)
    }

    /// Reads one register.
    ///
    /// The address is sent with the read command bits set and the register
    /// content is clocked in with a dummy byte. Bits 7:6 of `address` are
    /// overwritten by the command; addresses above 0x3F are a caller error.
    ///
    /// # Errors
    /// * `Error::Bus` - the bus failed; the session is closed regardless
    pub fn read_register_raw(&mut self, address: u8) -> Result<u8, Error<BUS::Error>> {
        let command = address | CMD_REGISTER_READ;

        self.session(|bus, delay| {
            delay.delay_us(ACCESS_GUARD_US);
            bus.exchange(command)?;
            let value = bus.exchange(DUMMY_BYTE)?;
            delay.delay_us(ACCESS_GUARD_US);
            Ok(value)
        })
    }

    /// Writes one register.
    ///
    /// Returns after the post-write settling time has elapsed.
    ///
    /// # Errors
    /// * `Error::Bus` - the bus failed; the session is closed regardless
    pub fn write_register_raw(&mut self, address: u8, value: u8) -> Result<(), Error<BUS::Error>> {
        let command = address | CMD_REGISTER_WRITE;

        self.session(|bus, delay| {
            delay.delay_us(ACCESS_GUARD_US);
            bus.exchange(command)?;
            bus.exchange(value)?;
            delay.delay_us(ACCESS_GUARD_US);
            Ok(())
        })?;

        #[cfg(feature = "defmt")]
        defmt::trace!("rf233: reg 0x{=u8:02x} <- 0x{=u8:02x}", address, value);

        self.delay.delay_us(WRITE_SETTLE_US);
        Ok(())
    }

    /// Reads a bit field, right aligned.
    pub fn read_subregister(&mut self, sr: Subregister) -> Result<u8, Error<BUS::Error>> {
        let register = self.read_register_raw(sr.address)?;
        Ok(sr.extract(register))
    }

    /// Writes a bit field with a read-modify-write of its register.
    ///
    /// Bits outside `sr.mask` are written back as they were read. Bits of
    /// `value` that do not fit the field are dropped.
    ///
    /// # Important Notes
    /// - The sequence is not atomic: a bit the chip changes between the read
    ///   and the write is overwritten with its old value
    pub fn write_subregister(&mut self, sr: Subregister, value: u8) -> Result<(), Error<BUS::Error>> {
        let register = self.read_register_raw(sr.address)?;
        self.write_register_raw(sr.address, sr.insert(register, value))
    }

    /// Reads a typed register value from the device.
    ///
    /// # Type Parameters
    /// * `R` - Register type implementing ReadableRegister with u8 ID and a
    ///   single byte payload
    ///
    /// # Errors
    /// * `Error::Bus` - SPI communication failed
    /// * `Error::Deserialization` - Failed to parse register value
    pub fn read_register<R>(&mut self) -> Result<R, Error<BUS::Error>>
    where
        R: ReadableRegister<IdType = u8> + FromByteArray<Array = [u8; 1]>,
    {
        let raw_value = self.read_register_raw(R::id())?;

        R::from_bytes([raw_value]).map_err(|_| Error::Deserialization)
    }

    /// Writes a typed register value to the device.
    ///
    /// # Type Parameters
    /// * `R` - Register type implementing WritableRegister with u8 ID and a
    ///   single byte payload
    ///
    /// # Errors
    /// * `Error::Bus` - SPI communication failed
    pub fn write_register<R>(&mut self, register: R) -> Result<(), Error<BUS::Error>>
    where
        R: WritableRegister<IdType = u8>
            + ToByteArray<Array = [u8; 1], Error = core::convert::Infallible>,
    {
        let [raw_value] = match register.to_bytes() {
            Ok(bytes) => bytes,
            Err(never) => match never {},
        };

        self.write_register_raw(R::id(), raw_value)
    }
}
