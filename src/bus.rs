//! Bus session primitive
//!
//! Every transaction with the RF233 is framed by the SEL line: it is pulled
//! low to open a session, an arbitrary number of full-duplex bytes are
//! exchanged, and it is released to close the session. The chip decodes the
//! first byte of each session as a command, so a session must never be left
//! open between two driver operations.
//!
//! The [`Bus`] trait captures exactly that contract. [`SpiSession`] implements
//! it on top of an `embedded-hal` [`SpiBus`] and a chip select [`OutputPin`].
//! Test doubles and simulated chips implement [`Bus`] directly.

use embedded_hal::{digital::OutputPin, spi::SpiBus};

/// One exclusive, bracketed bus session with the transceiver.
pub trait Bus {
    /// Error reported by the bus implementation
    type Error;

    /// Starts a session (asserts chip select).
    fn open(&mut self) -> Result<(), Self::Error>;

    /// Shifts `byte` out and returns the byte shifted in at the same time.
    fn exchange(&mut self, byte: u8) -> Result<u8, Self::Error>;

    /// Ends a session (releases chip select).
    fn close(&mut self) -> Result<(), Self::Error>;
}

/// Failure of either half of a [`SpiSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionError<S, P> {
    /// The SPI peripheral failed
    Spi(S),
    /// The chip select pin failed
    Pin(P),
}

/// [`Bus`] implementation over an SPI bus with a manually driven chip select.
///
/// The SPI bus must be configured for mode 0, MSB first, at no more than
/// 7.5 MHz (the RF233 synchronous SPI limit).
pub struct SpiSession<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> SpiSession<SPI, CS> {
    /// Creates a session adapter from an SPI bus and its chip select pin.
    ///
    /// The chip select pin is expected to idle high.
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    /// Releases the SPI bus and chip select pin.
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS> Bus for SpiSession<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    type Error = SessionError<SPI::Error, CS::Error>;

    fn open(&mut self) -> Result<(), Self::Error> {
        self.cs.set_low().map_err(SessionError::Pin)
    }

    fn exchange(&mut self, byte: u8) -> Result<u8, Self::Error> {
        let mut buf = [byte];
        self.spi
            .transfer_in_place(&mut buf)
            .map_err(SessionError::Spi)?;
        Ok(buf[0])
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        // SEL must not rise before the last byte has left the shift register
        let flushed = self.spi.flush().map_err(SessionError::Spi);
        self.cs.set_high().map_err(SessionError::Pin)?;
        flushed
    }
}
