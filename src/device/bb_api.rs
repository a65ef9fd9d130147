//! Binding to the vendor `libbb_api` shared library.

use std::ffi::CStr;
use std::os::raw::{c_char, c_int, c_void};
use std::ptr;

use num_complex::Complex;

use super::constants::{BB_FALSE, BB_MAX_DEVICES, BB_TRUE};
use super::sdk::{DataType, IqPacket, Sdk, SdkResult, Status, StreamParameters};

// ---------------------------------------------------------------------------
// FFI types
// ---------------------------------------------------------------------------

type BbStatus = c_int;

#[repr(C)]
struct BbIqPacket {
    iq_data: *mut c_void,
    iq_count: c_int,
    triggers: *mut c_int,
    trigger_count: c_int,
    purge: c_int,
    data_remaining: c_int,
    sample_loss: c_int,
    sec: c_int,
    nano: c_int,
}

extern "C" {
    fn bbGetAPIVersion() -> *const c_char;
    fn bbGetErrorString(status: BbStatus) -> *const c_char;
    fn bbGetSerialNumberList(serial_numbers: *mut c_int, device_count: *mut c_int) -> BbStatus;
    fn bbOpenDeviceBySerialNumber(device: *mut c_int, serial_number: c_int) -> BbStatus;
    fn bbCloseDevice(device: c_int) -> BbStatus;
    fn bbConfigureIQCenter(device: c_int, center_freq: f64) -> BbStatus;
    fn bbConfigureLevel(device: c_int, reference: f64, atten: f64) -> BbStatus;
    fn bbConfigureIO(device: c_int, port1: u32, port2: u32) -> BbStatus;
    fn bbConfigureIQ(device: c_int, downsample_factor: c_int, bandwidth: f64) -> BbStatus;
    fn bbConfigureIQDataType(device: c_int, data_type: c_int) -> BbStatus;
    fn bbInitiate(device: c_int, mode: u32, flag: u32) -> BbStatus;
    fn bbQueryIQParameters(device: c_int, sample_rate: *mut f64, bandwidth: *mut f64) -> BbStatus;
    fn bbGetIQ(device: c_int, pkt: *mut BbIqPacket) -> BbStatus;
}

fn check(status: BbStatus) -> SdkResult<()> {
    Status(status).into_result()
}

fn c_string(s: *const c_char) -> String {
    if s.is_null() {
        return String::new();
    }
    // SAFETY: the SDK returns pointers to static NUL-terminated strings.
    unsafe { CStr::from_ptr(s) }.to_string_lossy().into_owned()
}

/// The installed vendor library.
#[derive(Debug, Default, Clone, Copy)]
pub struct BbApi;

impl BbApi {
    pub fn new() -> Self {
        BbApi
    }
}

impl Sdk for BbApi {
    fn api_version(&self) -> String {
        // SAFETY: no arguments, returns a static string.
        c_string(unsafe { bbGetAPIVersion() })
    }

    fn error_string(&self, status: Status) -> String {
        // SAFETY: any status value is accepted, returns a static string.
        c_string(unsafe { bbGetErrorString(status.0) })
    }

    fn serial_numbers(&self) -> SdkResult<Vec<i32>> {
        let mut serials: [c_int; BB_MAX_DEVICES] = [0; BB_MAX_DEVICES];
        let mut count: c_int = 0;
        // SAFETY: the array holds BB_MAX_DEVICES entries as the SDK requires.
        check(unsafe { bbGetSerialNumberList(serials.as_mut_ptr(), &mut count) })?;
        let count = (count.max(0) as usize).min(BB_MAX_DEVICES);
        Ok(serials[..count].to_vec())
    }

    fn open_by_serial(&self, serial: i32) -> SdkResult<i32> {
        let mut handle: c_int = -1;
        // SAFETY: `handle` outlives the call.
        check(unsafe { bbOpenDeviceBySerialNumber(&mut handle, serial) })?;
        Ok(handle)
    }

    fn close(&self, handle: i32) -> SdkResult<()> {
        // SAFETY: plain value arguments.
        check(unsafe { bbCloseDevice(handle) })
    }

    fn configure_iq_center(&self, handle: i32, center_freq: f64) -> SdkResult<()> {
        // SAFETY: plain value arguments.
        check(unsafe { bbConfigureIQCenter(handle, center_freq) })
    }

    fn configure_level(&self, handle: i32, ref_level: f64, atten: f64) -> SdkResult<()> {
        // SAFETY: plain value arguments.
        check(unsafe { bbConfigureLevel(handle, ref_level, atten) })
    }

    fn configure_io(&self, handle: i32, port1: u32, port2: u32) -> SdkResult<()> {
        // SAFETY: plain value arguments.
        check(unsafe { bbConfigureIO(handle, port1, port2) })
    }

    fn configure_iq(&self, handle: i32, decimation: i32, bandwidth: f64) -> SdkResult<()> {
        // SAFETY: plain value arguments.
        check(unsafe { bbConfigureIQ(handle, decimation, bandwidth) })
    }

    fn configure_iq_data_type(&self, handle: i32, data_type: DataType) -> SdkResult<()> {
        // SAFETY: plain value arguments.
        check(unsafe { bbConfigureIQDataType(handle, data_type as c_int) })
    }

    fn initiate(&self, handle: i32, mode: u32, flag: u32) -> SdkResult<()> {
        // SAFETY: plain value arguments.
        check(unsafe { bbInitiate(handle, mode, flag) })
    }

    fn query_iq_parameters(&self, handle: i32) -> SdkResult<StreamParameters> {
        let mut sample_rate = 0.0;
        let mut bandwidth = 0.0;
        // SAFETY: both out-pointers outlive the call.
        check(unsafe { bbQueryIQParameters(handle, &mut sample_rate, &mut bandwidth) })?;
        Ok(StreamParameters {
            sample_rate,
            bandwidth,
        })
    }

    fn get_iq(
        &self,
        handle: i32,
        iq_data: &mut [Complex<f32>],
        packet: &mut IqPacket,
    ) -> SdkResult<()> {
        // Never let the SDK write past the caller's buffer
        let iq_count = packet.iq_count.min(iq_data.len()).min(c_int::MAX as usize);
        let (triggers, trigger_count) = match packet.triggers.as_mut() {
            Some(t) => (t.as_mut_ptr(), t.len().min(c_int::MAX as usize) as c_int),
            None => (ptr::null_mut(), 0),
        };
        let mut pkt = BbIqPacket {
            // Complex<f32> is repr(C) { re, im }, the layout of bbDataType32fc
            iq_data: iq_data.as_mut_ptr() as *mut c_void,
            iq_count: iq_count as c_int,
            triggers,
            trigger_count,
            purge: if packet.purge { BB_TRUE } else { BB_FALSE },
            data_remaining: 0,
            sample_loss: 0,
            sec: 0,
            nano: 0,
        };
        // SAFETY: iq_data holds at least iq_count samples and the trigger
        // buffer, when present, holds trigger_count entries.
        check(unsafe { bbGetIQ(handle, &mut pkt) })?;
        packet.data_remaining = pkt.data_remaining;
        packet.sample_loss = pkt.sample_loss != BB_FALSE;
        packet.sec = pkt.sec;
        packet.nano = pkt.nano;
        Ok(())
    }
}
