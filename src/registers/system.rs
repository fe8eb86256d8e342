//! Transceiver status and control registers
//!
//! This module contains registers for:
//! - Reading the current transceiver state
//! - Configuring the SPI, IRQ and automatic FCS behaviour
//! - Identifying the part
//!
//! These are exposed as typed `regiface` registers and are accessed with
//! [`Device::read_register`](crate::Device::read_register) and
//! [`Device::write_register`](crate::Device::write_register).

use core::convert::Infallible;

use bitflags::bitflags;
use regiface::{register, FromByteArray, ReadableRegister, ToByteArray, WritableRegister};

use super::Subregister;

/// Error type for TRX_STATUS state decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidTrxState(pub u8);

/// Transceiver state as reported in TRX_STATUS bits 4:0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TrxState {
    /// Power on after reset, clock not yet stable
    POn = 0x00,
    /// Receiving a frame (basic mode)
    BusyRx = 0x01,
    /// Transmitting a frame (basic mode)
    BusyTx = 0x02,
    /// Listening (basic mode)
    RxOn = 0x06,
    /// Transceiver off, clock running
    TrxOff = 0x08,
    /// PLL locked, ready to transmit
    PllOn = 0x09,
    /// Sleep
    Sleep = 0x0F,
    /// Preparing deep sleep
    PrepDeepSleep = 0x10,
    /// Receiving a frame (extended mode)
    BusyRxAack = 0x11,
    /// Transmitting a frame (extended mode)
    BusyTxAret = 0x12,
    /// Listening (extended mode)
    RxAackOn = 0x16,
    /// Ready to transmit (extended mode)
    TxAretOn = 0x19,
    /// A state change is in progress
    StateTransitionInProgress = 0x1F,
}

impl TrxState {
    /// Convert a raw TRX_STATUS field to a TrxState
    pub fn from_byte(value: u8) -> Result<Self, InvalidTrxState> {
        match value {
            0x00 => Ok(Self::POn),
            0x01 => Ok(Self::BusyRx),
            0x02 => Ok(Self::BusyTx),
            0x06 => Ok(Self::RxOn),
            0x08 => Ok(Self::TrxOff),
            0x09 => Ok(Self::PllOn),
            0x0F => Ok(Self::Sleep),
            0x10 => Ok(Self::PrepDeepSleep),
            0x11 => Ok(Self::BusyRxAack),
            0x12 => Ok(Self::BusyTxAret),
            0x16 => Ok(Self::RxAackOn),
            0x19 => Ok(Self::TxAretOn),
            0x1F => Ok(Self::StateTransitionInProgress),
            invalid => Err(InvalidTrxState(invalid)),
        }
    }

    /// Returns true while the transceiver is receiving, transmitting or
    /// switching states.
    pub fn is_busy(self) -> bool {
        matches!(
            self,
            Self::BusyRx
                | Self::BusyTx
                | Self::BusyRxAack
                | Self::BusyTxAret
                | Self::StateTransitionInProgress
        )
    }
}

/// Transceiver status register address
pub const TRX_STATUS: u8 = 0x01;

/// Raw state code, TRX_STATUS bits 4:0
///
/// Reserved codes can be read back during some transitions; decode with
/// [`TrxState::from_byte`] where they must be rejected.
pub const SR_TRX_STATUS: Subregister = Subregister::new(TRX_STATUS, 0x1F, 0);

/// Transceiver status register (address: 0x01)
///
/// Read-only. Reports the current state of the radio and the result of the
/// last clear channel assessment.
///
/// # Important Notes
/// - CCA fields are only valid after a CCA request completed
/// - Reading during a state transition returns `StateTransitionInProgress`
#[register(0x01u8)]
#[derive(Debug, Clone, Copy, ReadableRegister)]
pub struct TrxStatus {
    /// CCA measurement finished
    pub cca_done: bool,
    /// Channel found idle by the last CCA
    pub cca_status: bool,
    /// Current transceiver state
    pub state: TrxState,
}

bitflags! {
    /// TRX_CTRL_1 single bit settings
    ///
    /// Bits 3:2 hold the two-bit SPI_CMD_MODE field, see [`SpiCmdMode`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TrxCtrl1Flags: u8 {
        /// Drive DIG3/DIG4 as external RX/TX switch control
        const PA_EXT_EN = 1 << 7;
        /// Route the frame timestamp to pin DIG2
        const IRQ_2_EXT_EN = 1 << 6;
        /// Compute and append the FCS on transmit
        const TX_AUTO_CRC_ON = 1 << 5;
        /// Protect the frame buffer while reading a received frame
        const RX_BL_CTRL = 1 << 4;
        /// Report masked interrupts in IRQ_STATUS
        const IRQ_MASK_MODE = 1 << 1;
        /// IRQ pin is active low
        const IRQ_POLARITY = 1;
    }
}

/// Content of the first byte returned in every SPI session,
/// TRX_CTRL_1 bits 3:2
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiCmdMode {
    /// Fixed 0x00 (reset value)
    #[default]
    Default = 0x00,
    /// TRX_STATUS
    TrxStatus = 0x01,
    /// PHY_RSSI
    PhyRssi = 0x02,
    /// IRQ_STATUS
    IrqStatus = 0x03,
}

impl SpiCmdMode {
    const MASK: u8 = 0x0C;
    const POSITION: u8 = 2;

    fn from_register(value: u8) -> Self {
        match (value & Self::MASK) >> Self::POSITION {
            0x01 => Self::TrxStatus,
            0x02 => Self::PhyRssi,
            0x03 => Self::IrqStatus,
            _ => Self::Default,
        }
    }

    fn to_register(self) -> u8 {
        (self as u8) << Self::POSITION
    }
}

/// Transceiver control register 1 (address: 0x04)
///
/// # Important Notes
/// - Reset value is 0x22 (`TX_AUTO_CRC_ON | IRQ_MASK_MODE`)
/// - `TX_AUTO_CRC_ON` must agree with the driver's
///   [`ChecksumMode`](crate::frame::ChecksumMode)
#[register(0x04u8)]
#[derive(Debug, Clone, Copy, ReadableRegister, WritableRegister)]
pub struct TrxCtrl1 {
    /// Single bit settings
    pub flags: TrxCtrl1Flags,
    /// SPI_CMD_MODE field
    pub spi_cmd_mode: SpiCmdMode,
}

impl Default for TrxCtrl1 {
    fn default() -> Self {
        Self {
            flags: TrxCtrl1Flags::TX_AUTO_CRC_ON | TrxCtrl1Flags::IRQ_MASK_MODE,
            spi_cmd_mode: SpiCmdMode::Default,
        }
    }
}

/// Part number of the AT86RF233
pub const RF233_PART_NUM: u8 = 0x0B;

/// Part identification register (address: 0x1C)
///
/// Read-only. Reads 0x0B on an AT86RF233.
#[register(0x1Cu8)]
#[derive(Debug, Clone, Copy, ReadableRegister)]
pub struct PartNum {
    /// Part number
    pub value: u8,
}

impl FromByteArray for TrxStatus {
    type Error = InvalidTrxState;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self {
            cca_done: bytes[0] & 0x80 != 0,
            cca_status: bytes[0] & 0x40 != 0,
            state: TrxState::from_byte(bytes[0] & 0x1F)?,
        })
    }
}

impl FromByteArray for TrxCtrl1 {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self {
            flags: TrxCtrl1Flags::from_bits_retain(bytes[0] & !SpiCmdMode::MASK),
            spi_cmd_mode: SpiCmdMode::from_register(bytes[0]),
        })
    }
}

impl ToByteArray for TrxCtrl1 {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([(self.flags.bits() & !SpiCmdMode::MASK) | self.spi_cmd_mode.to_register()])
    }
}

impl FromByteArray for PartNum {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self { value: bytes[0] })
    }
}
