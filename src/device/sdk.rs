// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boundary to the vendor `bb_api` library.
//!
//! Each method of [`Sdk`] maps onto exactly one SDK entry point. The device
//! handle is passed through as the raw integer the SDK hands out; ownership
//! of that handle is tracked one level up, in [`super::Device`].

use std::fmt;

use num_complex::Complex;

/// Raw `bbStatus` code returned by every SDK call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status(pub i32);

impl Status {
    pub const NO_ERROR: Status = Status(0);

    /// Anything but `bbNoError` counts as a failure, warnings included.
    pub fn is_ok(self) -> bool {
        self == Status::NO_ERROR
    }

    pub fn into_result(self) -> SdkResult<()> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a single SDK call.
pub type SdkResult<T> = Result<T, Status>;

/// `bbDataType`: sample representation written by `bbGetIQ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum DataType {
    /// 32-bit float complex, interleaved I/Q.
    Complex32f = 0,
    /// 16-bit signed integer complex, interleaved I/Q.
    Complex16s = 1,
}

/// Request and response fields of one `bbGetIQ` call. The sample buffer is
/// passed next to the packet, never stored in it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IqPacket {
    /// Number of complex samples requested.
    pub iq_count: usize,
    /// Trigger positions buffer; `None` requests no trigger capture.
    pub triggers: Option<Vec<i32>>,
    /// Discard samples buffered before this call.
    pub purge: bool,
    // Filled in by the SDK
    pub data_remaining: i32,
    pub sample_loss: bool,
    pub sec: i32,
    pub nano: i32,
}

impl IqPacket {
    /// Packet for a purging read of `iq_count` samples without triggers.
    pub fn purging(iq_count: usize) -> Self {
        IqPacket {
            iq_count,
            triggers: None,
            purge: true,
            ..Default::default()
        }
    }

    pub fn trigger_count(&self) -> usize {
        self.triggers.as_ref().map_or(0, Vec::len)
    }
}

/// IQ stream settings reported by the SDK once streaming.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamParameters {
    /// Samples per second.
    pub sample_rate: f64,
    /// IQ filter bandwidth, Hz.
    pub bandwidth: f64,
}

/// Signal Hound BB60 SDK entry points.
pub trait Sdk {
    fn api_version(&self) -> String;
    fn error_string(&self, status: Status) -> String;
    fn serial_numbers(&self) -> SdkResult<Vec<i32>>;
    fn open_by_serial(&self, serial: i32) -> SdkResult<i32>;
    fn close(&self, handle: i32) -> SdkResult<()>;
    fn configure_iq_center(&self, handle: i32, center_freq: f64) -> SdkResult<()>;
    fn configure_level(&self, handle: i32, ref_level: f64, atten: f64) -> SdkResult<()>;
    fn configure_io(&self, handle: i32, port1: u32, port2: u32) -> SdkResult<()>;
    fn configure_iq(&self, handle: i32, decimation: i32, bandwidth: f64) -> SdkResult<()>;
    fn configure_iq_data_type(&self, handle: i32, data_type: DataType) -> SdkResult<()>;
    fn initiate(&self, handle: i32, mode: u32, flag: u32) -> SdkResult<()>;
    fn query_iq_parameters(&self, handle: i32) -> SdkResult<StreamParameters>;
    fn get_iq(
        &self,
        handle: i32,
        iq_data: &mut [Complex<f32>],
        packet: &mut IqPacket,
    ) -> SdkResult<()>;
}
