use bb60c_rs::{Bb60cSource, Block, DataType, IqPacket, Sdk, SdkResult, SourceConfig, Status};
use bb60c_rs::StreamParameters;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_complex::Complex;

/// SDK that succeeds immediately and fills nothing, isolating the work path.
#[derive(Debug)]
struct NullSdk;

impl Sdk for NullSdk {
    fn api_version(&self) -> String {
        String::new()
    }
    fn error_string(&self, _status: Status) -> String {
        String::new()
    }
    fn serial_numbers(&self) -> SdkResult<Vec<i32>> {
        Ok(vec![1])
    }
    fn open_by_serial(&self, _serial: i32) -> SdkResult<i32> {
        Ok(0)
    }
    fn close(&self, _handle: i32) -> SdkResult<()> {
        Ok(())
    }
    fn configure_iq_center(&self, _handle: i32, _center_freq: f64) -> SdkResult<()> {
        Ok(())
    }
    fn configure_level(&self, _handle: i32, _ref_level: f64, _atten: f64) -> SdkResult<()> {
        Ok(())
    }
    fn configure_io(&self, _handle: i32, _port1: u32, _port2: u32) -> SdkResult<()> {
        Ok(())
    }
    fn configure_iq(&self, _handle: i32, _decimation: i32, _bandwidth: f64) -> SdkResult<()> {
        Ok(())
    }
    fn configure_iq_data_type(&self, _handle: i32, _data_type: DataType) -> SdkResult<()> {
        Ok(())
    }
    fn initiate(&self, _handle: i32, _mode: u32, _flag: u32) -> SdkResult<()> {
        Ok(())
    }
    fn query_iq_parameters(&self, _handle: i32) -> SdkResult<StreamParameters> {
        Ok(StreamParameters {
            sample_rate: 40.0e6,
            bandwidth: 27.0e6,
        })
    }
    fn get_iq(
        &self,
        _handle: i32,
        iq_data: &mut [Complex<f32>],
        packet: &mut IqPacket,
    ) -> SdkResult<()> {
        black_box(iq_data);
        black_box(packet);
        Ok(())
    }
}

fn bench_work(c: &mut Criterion) {
    let config = SourceConfig::new(1.0e9, -20.0, 1, 27.0e6);
    let mut source = match Bb60cSource::open(NullSdk, config) {
        Ok(source) => source,
        Err(e) => panic!("setup failed: {}", e),
    };

    let mut group = c.benchmark_group("work");
    for len in [1024_usize, 16384, 262144] {
        let mut buf = vec![Complex::new(0.0_f32, 0.0); len];
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| source.work(black_box(&mut buf)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_work);
criterion_main!(benches);
