//! RF-related registers
//!
//! This module contains the registers controlling the radio front end:
//! - Transmit power
//! - Channel selection and clear channel assessment
//!
//! Both are plain read-modify-write fields, accessed through [`Subregister`].

use super::Subregister;

/// Transmit power control register (address: 0x05)
pub const PHY_TX_PWR: u8 = 0x05;

/// Channel and CCA control register (address: 0x08)
pub const PHY_CC_CCA: u8 = 0x08;

/// Transmit power setting, PHY_TX_PWR bits 3:0
///
/// - 0x00 = +4 dBm (highest)
/// - 0x0F = -17 dBm (lowest)
///
/// The mapping is not linear, see table 9-1 of the datasheet.
pub const SR_TX_PWR: Subregister = Subregister::new(PHY_TX_PWR, 0x0F, 0);

/// Lowest output power setting (-17 dBm)
pub const TX_PWR_MIN: u8 = 0x0F;

/// Highest output power setting (+4 dBm)
pub const TX_PWR_MAX: u8 = 0x00;

/// IEEE 802.15.4 channel number, PHY_CC_CCA bits 4:0
///
/// # Important Notes
/// - Only channels 11 to 26 are valid in the 2.4 GHz band
/// - The chip keeps its previous channel if a reserved value is written
pub const SR_CHANNEL: Subregister = Subregister::new(PHY_CC_CCA, 0x1F, 0);

/// First channel of the 2.4 GHz O-QPSK page
pub const CHANNEL_MIN: u8 = 11;

/// Last channel of the 2.4 GHz O-QPSK page
pub const CHANNEL_MAX: u8 = 26;
