//! Mock version of the bb_api library
use mockall::mock;
use num_complex::Complex;

use super::sdk::{DataType, IqPacket, Sdk, SdkResult, Status, StreamParameters};

mock! {
    pub Sdk {}
    impl Sdk for Sdk {
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
}
