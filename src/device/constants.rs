#![allow(dead_code)]

/// Handle value of a device that has not been opened, or has been closed.
pub const INVALID_HANDLE: i32 = -1;

/// Size of the serial number array filled by `bbGetSerialNumberList`.
pub const BB_MAX_DEVICES: usize = 8;

pub const BB_TRUE: i32 = 1;
pub const BB_FALSE: i32 = 0;

// Level
pub const BB_AUTO_ATTEN: f64 = -1.0;
pub const BB_MAX_REFERENCE: f64 = 20.0;

// Digital I/O port settings. Zero leaves both BNC ports disabled.
pub const BB_PORT_DISABLED: u32 = 0x0;

// Modes
pub const BB_IDLE: u32 = u32::MAX;
pub const BB_SWEEPING: u32 = 0x0;
pub const BB_REAL_TIME: u32 = 0x1;
pub const BB_STREAMING: u32 = 0x4;
pub const BB_AUDIO_DEMOD: u32 = 0x7;
pub const BB_TG_SWEEPING: u32 = 0x8;

// Streaming flags
pub const BB_STREAM_IQ: u32 = 0x0;
pub const BB_DIRECT_RF: u32 = 0x2;
pub const BB_TIME_STAMP: u32 = 0x10;

// Frequency limits, Hz
pub const BB_MIN_FREQ: f64 = 9.0e3;
pub const BB_MAX_FREQ: f64 = 6.4e9;

/// Native IQ rate before decimation, samples/s.
pub const BB_NATIVE_IQ_RATE: f64 = 40.0e6;
