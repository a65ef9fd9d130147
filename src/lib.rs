//! # bb60c Library
//! Source block streaming IQ samples from a Signal Hound BB60C.
//!
//! The vendor SDK sits behind the [`Sdk`] trait. Build with the `bb-api`
//! feature to link the installed `libbb_api` and use [`BbApi`].

pub mod block;
mod capture;
pub mod device;
pub mod error;
mod source;

#[cfg(feature = "bb-api")]
pub use device::bb_api::BbApi;
pub use block::{Block, IoSignature};
pub use capture::capture;
pub use device::{DataType, IqPacket, Sdk, SdkResult, Status, StreamParameters};
pub use error::{Bb60Error, DeviceError, Result, Stage};
pub use source::{Bb60cSource, SourceConfig, SourceState};

/// Samples per `work` call used by the capture binary.
pub const DEFAULT_BUF_LENGTH: usize = 16 * 16384;

/// Source bound to the installed vendor library.
#[cfg(feature = "bb-api")]
pub type Bb60c = Bb60cSource<BbApi>;

#[cfg(feature = "bb-api")]
impl Bb60cSource<BbApi> {
    /// Open the first attached BB60C and start streaming.
    pub fn open_first_available(config: SourceConfig) -> Result<Self> {
        Bb60cSource::open(BbApi::new(), config)
    }
}
