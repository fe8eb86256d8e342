//! Radio configuration helpers
//!
//! This module contains the configuration and status helpers built on top of
//! the register access protocol of [`Device`](crate::Device). They are
//! organized into functional categories:
//!
//! - `rf`: channel and transmit power
//! - `address`: PAN id, short address and IEEE address
//! - `status`: transceiver state, idle detection, part identification
//! - `operational`: keeping chip settings in line with the driver config
//!
//! All helpers are inherent methods of `Device`; this module only groups
//! their implementations.
//!
//! # Important Notes
//! - Register writes take effect immediately; most of them should only be
//!   issued in TRX_OFF
//! - Field updates are read-modify-write and not atomic

mod address;
mod operational;
mod rf;
mod status;
