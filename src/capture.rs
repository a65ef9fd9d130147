//! Host loop driving a source block into a byte sink.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use byteorder::{LittleEndian, WriteBytesExt};
use log::info;
use num_complex::Complex;

use crate::block::Block;
use crate::error::{Bb60Error, Result};

/// Run `block` until `shutdown` is set or `limit` samples were written.
/// Samples go to `out` as interleaved little-endian `f32` I/Q pairs.
/// Returns the number of samples written. The block is not stopped here.
pub fn capture<B, W>(
    block: &mut B,
    out: &mut W,
    buf_len: usize,
    limit: Option<u64>,
    shutdown: &AtomicBool,
) -> Result<u64>
where
    B: Block<Item = Complex<f32>>,
    W: Write,
{
    if buf_len == 0 {
        return Err(Bb60Error::Bb60Err("buffer length must be non-zero".to_string()));
    }
    let mut buf = vec![Complex::new(0.0_f32, 0.0); buf_len];
    let mut total: u64 = 0;

    while !shutdown.load(Ordering::Relaxed) {
        let want = match limit {
            Some(limit) if total >= limit => break,
            Some(limit) => ((limit - total) as usize).min(buf_len),
            None => buf_len,
        };
        let n = block.work(&mut buf[..want])?;
        for sample in &buf[..n] {
            out.write_f32::<LittleEndian>(sample.re)?;
            out.write_f32::<LittleEndian>(sample.im)?;
        }
        total += n as u64;
    }
    out.flush()?;
    info!("Captured {} samples", total);
    Ok(total)
}
