//! Address filter registers
//!
//! The frame filter of the extended operating mode compares incoming frames
//! against the PAN id, the 16-bit short address and the 64-bit IEEE address.
//! All multi-byte values are stored least significant byte first.

/// Short address, low byte (address: 0x20)
pub const SHORT_ADDR_0: u8 = 0x20;

/// Short address, high byte (address: 0x21)
pub const SHORT_ADDR_1: u8 = 0x21;

/// PAN id, low byte (address: 0x22)
pub const PAN_ID_0: u8 = 0x22;

/// PAN id, high byte (address: 0x23)
pub const PAN_ID_1: u8 = 0x23;

/// IEEE address, least significant byte (address: 0x24)
///
/// The remaining seven bytes follow at 0x25 - 0x2B.
pub const IEEE_ADDR_0: u8 = 0x24;

/// Length of the extended IEEE address in bytes
pub const IEEE_ADDR_LEN: usize = 8;
