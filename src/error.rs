//! Driver error type

/// Errors reported by the RF233 driver.
///
/// The frame length bounds check on receive is not an error: it is reported
/// through [`RxFrame`](crate::frame::RxFrame) with `len = 0` and
/// [`Crc::Bad`](crate::frame::Crc::Bad).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The underlying bus reported a failure
    Bus(E),
    /// Channel outside of the 2.4 GHz page 0 range (11..=26)
    InvalidChannel(u8),
    /// PART_NUM did not identify an AT86RF233
    UnknownPart(u8),
    /// A typed register could not be decoded from its raw value
    Deserialization,
}
