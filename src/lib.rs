#![cfg_attr(not(test), no_std)]
//! AT86RF233 Radio Driver
//!
//! This crate provides a low-level interface for the Microchip (formerly
//! Atmel) AT86RF233, a 2.4 GHz IEEE 802.15.4 transceiver driven over SPI.
//!
//! # Features
//! - Single register and bit field (subregister) access
//! - Typed registers for status and control
//! - Frame buffer upload and download with length validation
//! - Chip generated or caller supplied frame check sequence
//! - Channel, transmit power and address filter helpers
//!
//! # Architecture
//! The driver is organized into several modules:
//!
//! - [`bus`]: the bus session contract and its SPI implementation
//!   - [`Bus`]: open / exchange / close, one byte at a time
//!   - [`SpiSession`]: `embedded-hal` SPI bus plus chip select pin
//!
//! - [`device`]: main device interface and register access protocol
//!
//! - [`frame`]: frame buffer transfer ([`Device::receive`], [`Device::transmit`])
//!
//! - [`registers`]: register addresses, bit fields and typed registers
//!   - [`registers::TrxStatus`]: transceiver state
//!   - [`registers::TrxCtrl1`]: SPI, IRQ and automatic FCS configuration
//!   - [`registers::PartNum`]: part identification
//!
//! Configuration helpers (channel, power, addresses, idle state) are
//! methods of [`Device`] as well.
//!
//! # Scope
//! The driver ends at the byte transfer boundary. It does not implement
//! medium access, retransmission, interrupt handling or power management;
//! those belong to the layers above.
//!
//! Every operation is blocking and runs complete bus sessions. A [`Device`]
//! is not safe to share between execution contexts without an external lock.
//!
//! # Example
//! ```no_run
//! use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};
//! use rf233::{Crc, Device, RxFrame, SpiSession};
//!
//! fn ping<SPI: SpiBus, CS: OutputPin, D: DelayNs>(spi: SPI, cs: CS, delay: D) {
//!     let mut radio = Device::new(SpiSession::new(spi, cs), delay);
//!
//!     if radio.probe().is_err() {
//!         return;
//!     }
//!     let _ = radio.sync_checksum_mode();
//!     let _ = radio.set_channel(26);
//!
//!     // Two trailing bytes reserved for the chip generated FCS
//!     let _ = radio.transmit(&[0x41, 0x88, 0x01, 0xCD, 0xAB, 0xFF, 0xFF, 0, 0]);
//!
//!     let mut frame = RxFrame::new();
//!     if radio.receive(&mut frame).is_ok() && frame.crc == Crc::Ok {
//!         let _psdu = frame.payload();
//!     }
//! }
//! ```

pub mod bus;
mod commands;
pub mod device;
pub mod error;
pub mod frame;
pub mod registers;

#[cfg(test)]
mod mock;

pub use bus::{Bus, SessionError, SpiSession};
pub use device::{Config, Device};
pub use error::Error;
pub use frame::{ChecksumMode, Crc, RxFrame, MAX_FRAME_LENGTH, MIN_FRAME_LENGTH};
