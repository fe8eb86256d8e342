//! Simulated transceiver for unit tests
//!
//! [`SimChip`] decodes the command byte of each session the way the RF233
//! does: register reads and writes act on a 64 byte register file, frame
//! reads replay `rx_stream`, frame writes are only recorded. Every byte
//! shifted out is kept per session in `sessions`.

use std::collections::VecDeque;

use embedded_hal::delay::DelayNs;

use crate::bus::Bus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Idle,
    RegisterRead(u8),
    RegisterWrite(u8),
    FrameRead,
    FrameWrite,
}

pub struct SimChip {
    pub registers: [u8; 64],
    /// Bytes returned after a frame read command: PHR, PSDU, LQI, RX status
    pub rx_stream: VecDeque<u8>,
    /// Values returned by TRX_STATUS reads before `registers[0x01]` is used
    pub status_sequence: VecDeque<u8>,
    /// Bytes shifted out, one entry per session
    pub sessions: Vec<Vec<u8>>,
    pub opens: usize,
    pub closes: usize,
    /// Index (over all sessions) of the exchange that fails
    pub fail_on_exchange: Option<usize>,
    exchanges: usize,
    access: Access,
    in_session: bool,
}

impl SimChip {
    pub fn new() -> Self {
        Self {
            registers: [0; 64],
            rx_stream: VecDeque::new(),
            status_sequence: VecDeque::new(),
            sessions: Vec::new(),
            opens: 0,
            closes: 0,
            fail_on_exchange: None,
            exchanges: 0,
            access: Access::Idle,
            in_session: false,
        }
    }
}

impl Bus for SimChip {
    type Error = SimError;

    fn open(&mut self) -> Result<(), Self::Error> {
        assert!(!self.in_session, "session opened twice");
        self.in_session = true;
        self.opens += 1;
        self.sessions.push(Vec::new());
        self.access = Access::Idle;
        Ok(())
    }

    fn exchange(&mut self, byte: u8) -> Result<u8, Self::Error> {
        assert!(self.in_session, "exchange outside of a session");

        let index = self.exchanges;
        self.exchanges += 1;
        if self.fail_on_exchange == Some(index) {
            return Err(SimError);
        }

        let session = self.sessions.last_mut().expect("open pushes a session");
        let first = session.is_empty();
        session.push(byte);

        if first {
            self.access = match byte {
                b if b & 0xC0 == 0xC0 => Access::RegisterWrite(b & 0x3F),
                b if b & 0xC0 == 0x80 => Access::RegisterRead(b & 0x3F),
                0x20 => Access::FrameRead,
                0x60 => Access::FrameWrite,
                other => panic!("unknown command 0x{other:02x}"),
            };
            // PHY status byte, not used by the driver
            return Ok(0x00);
        }

        Ok(match self.access {
            Access::RegisterRead(0x01) => self
                .status_sequence
                .pop_front()
                .unwrap_or(self.registers[0x01]),
            Access::RegisterRead(address) => self.registers[address as usize],
            Access::RegisterWrite(address) => {
                self.registers[address as usize] = byte;
                0x00
            }
            Access::FrameRead => self.rx_stream.pop_front().unwrap_or(0x00),
            Access::FrameWrite | Access::Idle => 0x00,
        })
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        assert!(self.in_session, "session closed twice");
        self.in_session = false;
        self.closes += 1;
        Ok(())
    }
}

/// Delay provider that records requested delays instead of waiting
#[derive(Default)]
pub struct FakeDelay {
    pub calls_us: Vec<u32>,
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls_us.push(ns.div_ceil(1_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.calls_us.push(us);
    }
}
