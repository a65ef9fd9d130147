pub mod constants;
pub use constants::*;
pub mod sdk;
pub use sdk::{DataType, IqPacket, Sdk, SdkResult, Status, StreamParameters};
#[cfg(feature = "bb-api")]
pub mod bb_api;
#[cfg(test)]
pub(crate) mod mock_sdk;

use crate::error::{Bb60Error, DeviceError, Result, Stage};
use crate::SourceConfig;
use log::{error, info, warn};
use num_complex::Complex;
use std::fmt;


/// Owner of one BB60 device handle
pub struct Device<S: Sdk> {
    sdk: S,
    handle: i32,
}

impl<S: Sdk> Device<S> {
    pub fn new(sdk: S) -> Device<S> {
        Device {
            sdk,
            handle: INVALID_HANDLE,
        }
    }

    pub fn handle(&self) -> i32 {
        self.handle
    }

    pub fn is_open(&self) -> bool {
        self.handle != INVALID_HANDLE
    }

    pub fn api_version(&self) -> String {
        self.sdk.api_version()
    }

    /// Turn a failed SDK call into a `DeviceError` carrying the SDK's message.
    fn check<T>(&self, stage: Stage, res: SdkResult<T>) -> Result<T> {
        res.map_err(|status| {
            let message = self.sdk.error_string(status);
            error!("{} failed: {}", stage, message);
            Bb60Error::Device(DeviceError::new(stage, status, message))
        })
    }

    /// Open the first attached device. Returns its serial number.
    pub fn open_first(&mut self) -> Result<i32> {
        if self.is_open() {
            return Err(Bb60Error::Bb60Err(format!(
                "device handle {} is already open",
                self.handle
            )));
        }
        let serials = self.check(Stage::Enumerate, self.sdk.serial_numbers())?;
        let serial = match serials.first() {
            Some(&serial) => serial,
            None => {
                error!("no BB60 devices found");
                return Err(DeviceError::no_device().into());
            }
        };
        info!("Attempting to open device with serial number {}", serial);
        self.handle = self.check(Stage::Open, self.sdk.open_by_serial(serial))?;
        info!("Opened device");
        Ok(serial)
    }

    /// Apply `config` and switch the device to IQ streaming.
    pub fn configure(&mut self, config: &SourceConfig) -> Result<()> {
        let handle = self.handle;

        let res = self.sdk.configure_iq_center(handle, config.center_freq);
        self.check(Stage::SetCenter, res)?;
        info!("Set center frequency");

        // Attenuation is always left to the device
        let res = self
            .sdk
            .configure_level(handle, config.ref_level, BB_AUTO_ATTEN);
        self.check(Stage::SetLevel, res)?;
        info!("Configured reference level");

        let res = self
            .sdk
            .configure_io(handle, BB_PORT_DISABLED, BB_PORT_DISABLED);
        self.check(Stage::SetIo, res)?;
        info!("Configured BNC ports");

        let res = self
            .sdk
            .configure_iq(handle, config.decimation, config.filter_bw);
        self.check(Stage::SetIq, res)?;
        info!("Configured sampling rate and bandwidth");

        let res = self
            .sdk
            .configure_iq_data_type(handle, DataType::Complex32f);
        self.check(Stage::SetDataType, res)?;
        info!("Configured sample format");

        let res = self.sdk.initiate(handle, BB_STREAMING, BB_STREAM_IQ);
        self.check(Stage::Initiate, res)?;
        info!("Initiated IQ sampling");
        Ok(())
    }

    /// Open the first device and configure it. All or nothing: when any step
    /// after the open fails, the handle is closed before the error returns.
    pub fn setup(&mut self, config: &SourceConfig) -> Result<i32> {
        let serial = self.open_first()?;
        if let Err(e) = self.configure(config) {
            if let Err(close_err) = self.close() {
                warn!("Closing device after failed setup: {}", close_err);
            }
            return Err(e);
        }
        Ok(serial)
    }

    /// Blocking read of `buf.len()` samples, dropping anything buffered before
    /// the call. Returns the packet as completed by the SDK.
    pub fn read_iq(&self, buf: &mut [Complex<f32>]) -> Result<IqPacket> {
        let mut packet = IqPacket::purging(buf.len());
        let res = self.sdk.get_iq(self.handle, buf, &mut packet);
        self.check(Stage::GetIq, res)?;
        Ok(packet)
    }

    pub fn stream_parameters(&self) -> Result<StreamParameters> {
        let res = self.sdk.query_iq_parameters(self.handle);
        self.check(Stage::QueryIq, res)
    }

    /// Release the handle. The handle is forgotten even if the SDK reports
    /// an error, so it is never closed twice.
    pub fn close(&mut self) -> Result<()> {
        let handle = std::mem::replace(&mut self.handle, INVALID_HANDLE);
        let res = self.sdk.close(handle);
        self.check(Stage::Close, res)?;
        info!("Closed device");
        Ok(())
    }
}

impl<S: Sdk> Drop for Device<S> {
    fn drop(&mut self) {
        if self.is_open() {
            if let Err(e) = self.close() {
                error!("Failed to close device on drop: {}", e);
            }
        }
    }
}

impl<S: Sdk> fmt::Debug for Device<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Device {{ handle: {} }}", self.handle)
    }
}
