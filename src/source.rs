// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::mem::size_of;

use log::{info, warn};
use num_complex::Complex;

use crate::block::{Block, IoSignature};
use crate::device::{Device, Sdk, StreamParameters};
use crate::error::{Bb60Error, Result};

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

/// Acquisition settings, applied once when the source starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceConfig {
    pub center_freq: f64, // Hz
    pub ref_level: f64,   // dBm
    pub decimation: i32,  // power of two
    pub filter_bw: f64,   // Hz
}

impl SourceConfig {
    pub fn new(center_freq: f64, ref_level: f64, decimation: i32, filter_bw: f64) -> Self {
        SourceConfig {
            center_freq,
            ref_level,
            decimation,
            filter_bw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceState {
    Unopened,
    Streaming,
    Closed,
}

/// Source block streaming 32-bit float IQ samples from a BB60C.
#[derive(Debug)]
pub struct Bb60cSource<S: Sdk> {
    device: Device<S>,
    config: SourceConfig,
    state: SourceState,
    serial: Option<i32>,
}

impl<S: Sdk> Bb60cSource<S> {
    pub fn new(sdk: S, config: SourceConfig) -> Self {
        Bb60cSource {
            device: Device::new(sdk),
            config,
            state: SourceState::Unopened,
            serial: None,
        }
    }

    /// Create the source and bring the device up to streaming.
    pub fn open(sdk: S, config: SourceConfig) -> Result<Self> {
        let mut source = Self::new(sdk, config);
        source.start()?;
        Ok(source)
    }

    pub fn state(&self) -> SourceState {
        self.state
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Serial number of the opened device.
    pub fn serial(&self) -> Option<i32> {
        self.serial
    }

    /// Effective sample rate and bandwidth chosen by the device.
    pub fn stream_parameters(&self) -> Result<StreamParameters> {
        self.require_streaming()?;
        self.device.stream_parameters()
    }

    fn require_streaming(&self) -> Result<()> {
        match self.state {
            SourceState::Streaming => Ok(()),
            state => Err(Bb60Error::Bb60Err(format!(
                "source is not streaming (state {:?})",
                state
            ))),
        }
    }
}

impl<S: Sdk> Block for Bb60cSource<S> {
    type Item = Complex<f32>;

    fn block_name(&self) -> &'static str {
        "bb60c_source"
    }

    fn input_signature(&self) -> IoSignature {
        IoSignature::empty()
    }

    fn output_signature(&self) -> IoSignature {
        IoSignature::new(1, 1, size_of::<Complex<f32>>())
    }

    fn start(&mut self) -> Result<()> {
        if self.state != SourceState::Unopened {
            return Err(Bb60Error::Bb60Err(format!(
                "source can only start once (state {:?})",
                self.state
            )));
        }
        info!("center_freq = {:.0}", self.config.center_freq);
        info!("ref_level = {:.0}", self.config.ref_level);
        info!("decimation = {}", self.config.decimation);
        info!("filter_bw = {:.0}", self.config.filter_bw);
        info!("Signal Hound BB60 API version: {}", self.device.api_version());

        match self.device.setup(&self.config) {
            Ok(serial) => {
                self.serial = Some(serial);
                self.state = SourceState::Streaming;
                Ok(())
            }
            Err(e) => {
                self.state = SourceState::Closed;
                Err(e)
            }
        }
    }

    fn work(&mut self, output: &mut [Complex<f32>]) -> Result<usize> {
        self.require_streaming()?;
        let packet = self.device.read_iq(output)?;
        if packet.sample_loss {
            warn!("Sample loss before block of {} samples", packet.iq_count);
        }
        Ok(output.len())
    }

    fn stop(&mut self) -> Result<()> {
        let state = std::mem::replace(&mut self.state, SourceState::Closed);
        match state {
            SourceState::Streaming => self.device.close(),
            SourceState::Unopened | SourceState::Closed => Ok(()),
        }
    }
}
