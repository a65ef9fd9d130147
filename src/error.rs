use std::{fmt, io, result};

use crate::device::Status;

/// A result of a function that may return a `Bb60Error`.
pub type Result<T> = result::Result<T, Bb60Error>;

// Macro to create an error enum with From converters for each input error class
macro_rules! define_errcodes {
    [ $typename:ident => $( $name:ident : $class:ty ),+ ] => {
        #[derive(Debug)]
        pub enum $typename {
            $(
                $name($class),
            )+
        }

        impl fmt::Display for $typename {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                match *self {
                    $(
                        $typename::$name(ref err) => fmt::Display::fmt(err, f),
                    )+
                }
            }
        }

        impl std::error::Error for $typename {}

        $(
            impl From<$class> for $typename {
                fn from(e: $class) -> Self {
                    $typename::$name(e)
                }
            }
        )+
    };
}

define_errcodes![
    Bb60Error =>
    Device: DeviceError,
    Io: io::Error,
    Bb60Err: String
];

impl Bb60Error {
    /// Setup or streaming stage that failed, if the error came from the device.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Bb60Error::Device(e) => Some(e.stage),
            _ => None,
        }
    }
}

/// Named steps of the device lifecycle. Setup runs `Enumerate` through
/// `Initiate` in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Enumerate,
    Open,
    SetCenter,
    SetLevel,
    SetIo,
    SetIq,
    SetDataType,
    Initiate,
    QueryIq,
    GetIq,
    Close,
}

impl Stage {
    /// Name of the SDK entry point behind this stage.
    pub fn sdk_call(&self) -> &'static str {
        match self {
            Stage::Enumerate => "bbGetSerialNumberList()",
            Stage::Open => "bbOpenDeviceBySerialNumber()",
            Stage::SetCenter => "bbConfigureIQCenter()",
            Stage::SetLevel => "bbConfigureLevel()",
            Stage::SetIo => "bbConfigureIO()",
            Stage::SetIq => "bbConfigureIQ()",
            Stage::SetDataType => "bbConfigureIQDataType()",
            Stage::Initiate => "bbInitiate()",
            Stage::QueryIq => "bbQueryIQParameters()",
            Stage::GetIq => "bbGetIQ()",
            Stage::Close => "bbCloseDevice()",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.sdk_call())
    }
}

/// A failed SDK call: which stage, the raw status and the SDK's own message.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceError {
    pub stage: Stage,
    /// `None` when the stage failed without an SDK status (no devices found).
    pub status: Option<Status>,
    pub message: String,
}

impl DeviceError {
    pub fn new(stage: Stage, status: Status, message: String) -> Self {
        DeviceError {
            stage,
            status: Some(status),
            message,
        }
    }

    pub fn no_device() -> Self {
        DeviceError {
            stage: Stage::Enumerate,
            status: None,
            message: "no BB60 devices found".to_string(),
        }
    }
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.status {
            Some(status) => write!(
                f,
                "{} failed: {} (status {})",
                self.stage, self.message, status
            ),
            None => write!(f, "{} failed: {}", self.stage, self.message),
        }
    }
}
