//! Register definitions for the AT86RF233
//! Generated from the AT86RF233 datasheet (Atmel-8351)
//!
//! Registers are addressed with 6 bits (0x00 - 0x3F). Plain addresses are
//! exported as `u8` constants, bit fields inside a register as [`Subregister`]
//! descriptors, and registers that carry structured data as `regiface` types.

mod address;
mod rf;
mod system;

pub use address::*;
pub use rf::*;
pub use system::*;

/// A bit field inside a single register.
///
/// `mask` selects the bits of the field in register position and `position`
/// is the bit index of its least significant bit, so a field value `v` sits
/// in the register as `(v << position) & mask`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Subregister {
    /// Register address
    pub address: u8,
    /// Field mask, in register position
    pub mask: u8,
    /// Bit index of the field's least significant bit
    pub position: u8,
}

impl Subregister {
    /// Describes the field `mask` of register `address`, starting at bit `position`.
    pub const fn new(address: u8, mask: u8, position: u8) -> Self {
        Self {
            address,
            mask,
            position,
        }
    }

    /// Extracts the field from a full register value.
    pub const fn extract(&self, register: u8) -> u8 {
        (register & self.mask) >> self.position
    }

    /// Replaces the field inside a full register value, keeping all other bits.
    pub const fn insert(&self, register: u8, value: u8) -> u8 {
        (register & !self.mask) | ((value << self.position) & self.mask)
    }
}
