//! Recording stand-in for the vendor SDK.

use std::cell::RefCell;
use std::rc::Rc;

use bb60c_rs::{DataType, IqPacket, Sdk, SdkResult, Stage, Status, StreamParameters};
use num_complex::Complex;

pub const FAILURE: Status = Status(-100);

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Enumerate,
    Open(i32),
    IqCenter(f64),
    Level(f64, f64),
    Io(u32, u32),
    Iq(i32, f64),
    IqDataType(DataType),
    Initiate(u32, u32),
    QueryIq,
    GetIq {
        count: usize,
        triggers: usize,
        purge: bool,
    },
    Close(i32),
}

#[derive(Debug, Clone)]
pub struct FakeSdk {
    pub serials: Vec<i32>,
    pub handle: i32,
    /// Stage whose call reports `FAILURE`.
    pub fail_at: Option<Stage>,
    pub calls: Rc<RefCell<Vec<Call>>>,
}

impl FakeSdk {
    pub fn new(serials: Vec<i32>) -> Self {
        FakeSdk {
            serials,
            handle: 7,
            fail_at: None,
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn failing_at(mut self, stage: Stage) -> Self {
        self.fail_at = Some(stage);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, stage: Stage, call: Call) -> SdkResult<()> {
        self.calls.borrow_mut().push(call);
        if self.fail_at == Some(stage) {
            Err(FAILURE)
        } else {
            Ok(())
        }
    }
}

impl Sdk for FakeSdk {
    fn api_version(&self) -> String {
        "fake".to_string()
    }

    fn error_string(&self, status: Status) -> String {
        format!("fake failure {}", status)
    }

    fn serial_numbers(&self) -> SdkResult<Vec<i32>> {
        self.record(Stage::Enumerate, Call::Enumerate)?;
        Ok(self.serials.clone())
    }

    fn open_by_serial(&self, serial: i32) -> SdkResult<i32> {
        self.record(Stage::Open, Call::Open(serial))?;
        Ok(self.handle)
    }

    fn close(&self, handle: i32) -> SdkResult<()> {
        self.record(Stage::Close, Call::Close(handle))
    }

    fn configure_iq_center(&self, _handle: i32, center_freq: f64) -> SdkResult<()> {
        self.record(Stage::SetCenter, Call::IqCenter(center_freq))
    }

    fn configure_level(&self, _handle: i32, ref_level: f64, atten: f64) -> SdkResult<()> {
        self.record(Stage::SetLevel, Call::Level(ref_level, atten))
    }

    fn configure_io(&self, _handle: i32, port1: u32, port2: u32) -> SdkResult<()> {
        self.record(Stage::SetIo, Call::Io(port1, port2))
    }

    fn configure_iq(&self, _handle: i32, decimation: i32, bandwidth: f64) -> SdkResult<()> {
        self.record(Stage::SetIq, Call::Iq(decimation, bandwidth))
    }

    fn configure_iq_data_type(&self, _handle: i32, data_type: DataType) -> SdkResult<()> {
        self.record(Stage::SetDataType, Call::IqDataType(data_type))
    }

    fn initiate(&self, _handle: i32, mode: u32, flag: u32) -> SdkResult<()> {
        self.record(Stage::Initiate, Call::Initiate(mode, flag))
    }

    fn query_iq_parameters(&self, _handle: i32) -> SdkResult<StreamParameters> {
        self.record(Stage::QueryIq, Call::QueryIq)?;
        Ok(StreamParameters {
            sample_rate: 10.0e6,
            bandwidth: 8.0e6,
        })
    }

    fn get_iq(
        &self,
        _handle: i32,
        iq_data: &mut [Complex<f32>],
        packet: &mut IqPacket,
    ) -> SdkResult<()> {
        self.record(
            Stage::GetIq,
            Call::GetIq {
                count: packet.iq_count,
                triggers: packet.trigger_count(),
                purge: packet.purge,
            },
        )?;
        for (i, sample) in iq_data.iter_mut().take(packet.iq_count).enumerate() {
            *sample = Complex::new(i as f32, -(i as f32));
        }
        Ok(())
    }
}
