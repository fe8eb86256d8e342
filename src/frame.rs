//! Frame buffer transfer
//!
//! The RF233 holds one frame at a time in its internal frame buffer. A frame
//! is read with the frame read command followed by the PHR (the frame length,
//! FCS included), the PSDU, the LQI and the RX status byte. A frame is
//! written with the frame write command followed by the PHR and the PSDU.
//!
//! # Important Notes
//! - The received length is validated before any byte is stored, so a
//!   corrupted PHR can never overrun [`RxFrame::data`]
//! - With [`ChecksumMode::ChipGenerated`] the last two bytes of a transmitted
//!   frame are not sent; the chip appends its own FCS in their place

use embedded_hal::delay::DelayNs;

use crate::{
    bus::Bus,
    device::{Device, DUMMY_BYTE},
    Error,
};

/// Frame buffer read command
pub const CMD_FRAME_READ: u8 = 0x20;

/// Frame buffer write command
pub const CMD_FRAME_WRITE: u8 = 0x60;

/// Shortest frame accepted on receive, FCS included
pub const MIN_FRAME_LENGTH: u8 = 0x03;

/// Longest frame (aMaxPHYPacketSize), FCS included
pub const MAX_FRAME_LENGTH: u8 = 0x7F;

/// Number of FCS bytes at the end of a frame
pub const FCS_LENGTH: u8 = 2;

/// Source of the FCS bytes of transmitted frames
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChecksumMode {
    /// The chip computes the FCS (TX_AUTO_CRC_ON set); the last two bytes
    /// of each frame are not transferred
    #[default]
    ChipGenerated,
    /// The caller provides the FCS as the last two bytes of each frame
    CallerSupplied,
}

/// Integrity status of a received frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Crc {
    /// Frame accepted
    Ok,
    /// Frame rejected; its length was out of bounds
    Bad,
}

/// Caller owned buffer for one received frame.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RxFrame {
    /// Frame content, FCS included. Only the first `len` bytes are valid.
    pub data: [u8; MAX_FRAME_LENGTH as usize],
    /// Frame length, or 0 if the frame was rejected
    pub len: u8,
    /// Link quality indicator, or 0 if the frame was rejected
    pub lqi: u8,
    /// Frame status
    pub crc: Crc,
}

impl RxFrame {
    /// Creates an empty frame buffer.
    pub const fn new() -> Self {
        Self {
            data: [0; MAX_FRAME_LENGTH as usize],
            len: 0,
            lqi: 0,
            crc: Crc::Bad,
        }
    }

    /// Returns the valid part of the frame, FCS included.
    pub fn payload(&self) -> &[u8] {
        &self.data[..self.len as usize]
    }

    fn reject(&mut self) {
        self.len = 0;
        self.lqi = 0;
        self.crc = Crc::Bad;
    }
}

impl Default for RxFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl<BUS, DELAY> Device<BUS, DELAY>
where
    BUS: Bus,
    DELAY: DelayNs,
{
    /// Reads the frame currently held in the chip's frame buffer into `frame`.
    ///
    /// A reported length outside `MIN_FRAME_LENGTH..=MAX_FRAME_LENGTH` is not
    /// an error: `frame` is marked rejected (`len = 0`, `lqi = 0`,
    /// `crc = Crc::Bad`) and no payload byte is transferred.
    ///
    /// # Important Notes
    /// - The RX status byte following the LQI is clocked out but its
    ///   RX_CRC_VALID bit is ignored; accepted frames always report
    ///   `Crc::Ok`. Callers needing FCS validation must check it themselves.
    /// - Read the frame promptly: a new frame arriving in RX_ON overwrites
    ///   the buffer unless RX_BL_CTRL protection is enabled
    ///
    /// # Errors
    /// * `Error::Bus` - the bus failed; the session is closed regardless and
    ///   the content of `frame` is unspecified
    pub fn receive(&mut self, frame: &mut RxFrame) -> Result<(), Error<BUS::Error>> {
        self.session(|bus, _| {
            bus.exchange(CMD_FRAME_READ)?;
            let frame_length = bus.exchange(DUMMY_BYTE)?;

            if !(MIN_FRAME_LENGTH..=MAX_FRAME_LENGTH).contains(&frame_length) {
                #[cfg(feature = "defmt")]
                defmt::warn!("rf233: rx frame length {=u8} out of bounds", frame_length);

                frame.reject();
                return Ok(());
            }

            frame.len = frame_length;
            for byte in frame.data[..frame_length as usize].iter_mut() {
                *byte = bus.exchange(DUMMY_BYTE)?;
            }

            frame.lqi = bus.exchange(DUMMY_BYTE)?;
            // RX_STATUS must be clocked out to complete the transfer
            let _status = bus.exchange(DUMMY_BYTE)?;
            frame.crc = Crc::Ok;

            Ok(())
        })
    }

    /// Writes `frame` into the chip's frame buffer.
    ///
    /// The length byte sent is `frame.len()`. With
    /// [`ChecksumMode::ChipGenerated`] only `frame[..len - 2]` is shifted out,
    /// otherwise the whole slice.
    ///
    /// # Important Notes
    /// - `frame.len()` must not exceed `MAX_FRAME_LENGTH`. This is checked by
    ///   `debug_assert!` only: in release builds a longer slice is not
    ///   rejected, its length byte wraps modulo 256 and the whole slice is
    ///   still shifted out.
    /// - With `ChipGenerated`, `frame.len()` must be at least 2 (room for the
    ///   FCS). Shorter frames still send the length byte but no payload.
    ///
    /// # Errors
    /// * `Error::Bus` - the bus failed; the session is closed regardless
    pub fn transmit(&mut self, frame: &[u8]) -> Result<(), Error<BUS::Error>> {
        debug_assert!(frame.len() <= MAX_FRAME_LENGTH as usize);

        let length = frame.len() as u8;
        let payload = match self.config.checksum {
            ChecksumMode::ChipGenerated => {
                &frame[..frame.len().saturating_sub(FCS_LENGTH as usize)]
            }
            ChecksumMode::CallerSupplied => frame,
        };

        #[cfg(feature = "defmt")]
        defmt::trace!("rf233: tx frame, {=u8} bytes", length);

        self.session(|bus, _| {
            bus.exchange(CMD_FRAME_WRITE)?;
            bus.exchange(length)?;
            for &byte in payload {
                bus.exchange(byte)?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Config;
    use crate::mock::{FakeDelay, SimChip, SimError};

    fn device(checksum: ChecksumMode) -> Device<SimChip, FakeDelay> {
        Device::with_config(SimChip::new(), FakeDelay::default(), Config { checksum })
    }

    fn rx_stream(len: u8, payload: &[u8], lqi: u8, status: u8) -> Vec<u8> {
        let mut stream = vec![len];
        stream.extend_from_slice(payload);
        stream.extend_from_slice(&[lqi, status]);
        stream
    }

    #[test]
    fn receive_rejects_length_below_minimum() {
        let mut device = device(ChecksumMode::ChipGenerated);
        device.bus.rx_stream = rx_stream(MIN_FRAME_LENGTH - 1, &[1, 2], 0xFF, 0x80).into();

        let mut frame = RxFrame::new();
        frame.len = 9;
        frame.lqi = 9;
        frame.crc = Crc::Ok;
        device.receive(&mut frame).unwrap();

        assert_eq!(frame.len, 0);
        assert_eq!(frame.lqi, 0);
        assert_eq!(frame.crc, Crc::Bad);
        assert_eq!(device.bus.sessions, [vec![CMD_FRAME_READ, DUMMY_BYTE]]);
        assert_eq!((device.bus.opens, device.bus.closes), (1, 1));
    }

    #[test]
    fn receive_rejects_length_above_maximum() {
        let mut device = device(ChecksumMode::ChipGenerated);
        device.bus.rx_stream = rx_stream(MAX_FRAME_LENGTH + 1, &[], 0, 0).into();

        let mut frame = RxFrame::new();
        device.receive(&mut frame).unwrap();

        assert_eq!(frame.len, 0);
        assert_eq!(frame.crc, Crc::Bad);
        assert_eq!(device.bus.sessions[0].len(), 2);
        assert!(frame.data.iter().all(|&b| b == 0));
        assert_eq!((device.bus.opens, device.bus.closes), (1, 1));
    }

    #[test]
    fn receive_accepts_minimum_length() {
        let mut device = device(ChecksumMode::ChipGenerated);
        device.bus.rx_stream = rx_stream(MIN_FRAME_LENGTH, &[0x41, 0x88, 0x07], 0xE4, 0x80).into();

        let mut frame = RxFrame::new();
        device.receive(&mut frame).unwrap();

        assert_eq!(frame.len, MIN_FRAME_LENGTH);
        assert_eq!(frame.payload(), [0x41, 0x88, 0x07]);
        assert_eq!(frame.lqi, 0xE4);
        assert_eq!(frame.crc, Crc::Ok);
        // command, length, 3 payload bytes, LQI, status
        assert_eq!(device.bus.sessions[0].len(), 2 + 3 + 2);
        assert!(device.bus.rx_stream.is_empty());
        assert_eq!((device.bus.opens, device.bus.closes), (1, 1));
    }

    #[test]
    fn receive_accepts_maximum_length() {
        let payload: Vec<u8> = (0..MAX_FRAME_LENGTH).collect();
        let mut device = device(ChecksumMode::ChipGenerated);
        device.bus.rx_stream = rx_stream(MAX_FRAME_LENGTH, &payload, 0x33, 0x00).into();

        let mut frame = RxFrame::new();
        device.receive(&mut frame).unwrap();

        assert_eq!(frame.payload(), payload.as_slice());
        assert_eq!(frame.lqi, 0x33);
        assert_eq!(frame.crc, Crc::Ok);
    }

    #[test]
    fn receive_ignores_rx_crc_valid_bit() {
        let mut device = device(ChecksumMode::ChipGenerated);
        device.bus.rx_stream = rx_stream(4, &[1, 2, 3, 4], 0x10, 0x00).into();

        let mut frame = RxFrame::new();
        device.receive(&mut frame).unwrap();

        assert_eq!(frame.crc, Crc::Ok);
    }

    #[test]
    fn receive_closes_session_on_bus_failure() {
        let mut device = device(ChecksumMode::ChipGenerated);
        device.bus.rx_stream = rx_stream(5, &[1, 2, 3, 4, 5], 0x10, 0x00).into();
        device.bus.fail_on_exchange = Some(4);

        let mut frame = RxFrame::new();
        assert_eq!(device.receive(&mut frame), Err(Error::Bus(SimError)));
        assert_eq!((device.bus.opens, device.bus.closes), (1, 1));
    }

    #[test]
    fn transmit_with_chip_checksum_skips_fcs_bytes() {
        let frame: Vec<u8> = (1..=10).collect();
        let mut device = device(ChecksumMode::ChipGenerated);

        device.transmit(&frame).unwrap();

        let session = &device.bus.sessions[0];
        assert_eq!(session[..2], [CMD_FRAME_WRITE, 10]);
        assert_eq!(session[2..], frame[..8]);
        assert_eq!((device.bus.opens, device.bus.closes), (1, 1));
    }

    #[test]
    fn transmit_with_caller_checksum_sends_whole_frame() {
        let frame: Vec<u8> = (1..=10).collect();
        let mut device = device(ChecksumMode::CallerSupplied);

        device.transmit(&frame).unwrap();

        let session = &device.bus.sessions[0];
        assert_eq!(session[..2], [CMD_FRAME_WRITE, 10]);
        assert_eq!(session[2..], frame[..]);
        assert_eq!((device.bus.opens, device.bus.closes), (1, 1));
    }

    #[test]
    fn transmit_shorter_than_fcs_sends_header_only() {
        let mut device = device(ChecksumMode::ChipGenerated);

        device.transmit(&[0x55]).unwrap();

        assert_eq!(device.bus.sessions, [vec![CMD_FRAME_WRITE, 1]]);
        assert_eq!((device.bus.opens, device.bus.closes), (1, 1));
    }

    #[test]
    fn transmit_closes_session_on_bus_failure() {
        let mut device = device(ChecksumMode::CallerSupplied);
        device.bus.fail_on_exchange = Some(3);

        assert_eq!(device.transmit(&[1, 2, 3, 4]), Err(Error::Bus(SimError)));
        assert_eq!((device.bus.opens, device.bus.closes), (1, 1));
    }

    #[test]
    fn frame_transfers_use_no_delays() {
        let mut device = device(ChecksumMode::ChipGenerated);
        device.bus.rx_stream = rx_stream(3, &[1, 2, 3], 0, 0).into();

        device.receive(&mut RxFrame::new()).unwrap();
        device.transmit(&[1, 2, 3, 4]).unwrap();

        assert!(device.delay.calls_us.is_empty());
    }
}
