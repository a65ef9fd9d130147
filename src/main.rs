//! Capture IQ samples from the first attached BB60C to a file or stdout.
//!
//! Samples are written as raw interleaved little-endian `f32` I/Q pairs.
//!
//! Example: capture one second of 10 MS/s around 2.4 GHz
//! bb60c_rx -f 2400000000 -r -10 -d 4 -b 8000000 -n 10000000 -o capture.cf32
//!
//! Any device error is fatal: it is logged and the process exits with a
//! failure status.

use bb60c_rs::{capture, Bb60c, Block, SourceConfig, DEFAULT_BUF_LENGTH};
use log::{error, info};
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};

// Defaults
const CENTER_FREQ: f64 = 2_400_000_000.0; // Hz
const REF_LEVEL: f64 = -10.0; // dBm
const DECIMATION: i32 = 4;
const FILTER_BW: f64 = 2_000_000.0; // Hz

#[derive(Debug)]
struct Options {
    config: SourceConfig,
    num_samples: Option<u64>,
    output: Option<String>,
    verbose: usize,
}

fn usage() -> String {
    "usage: bb60c_rx [-f center_hz] [-r ref_dbm] [-d decimation] [-b filter_bw_hz] \
     [-n num_samples] [-o path] [-v]..."
        .to_string()
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("missing value for {}", flag))?;
    value
        .parse::<T>()
        .map_err(|_| format!("invalid value for {}: '{}'", flag, value))
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut config = SourceConfig::new(CENTER_FREQ, REF_LEVEL, DECIMATION, FILTER_BW);
    let mut num_samples = None;
    let mut output = None;
    let mut verbose = 2;

    let mut args_iter = args.iter().skip(1);
    while let Some(arg) = args_iter.next() {
        match arg.as_str() {
            "--freq" | "-f" => config.center_freq = parse_value(arg, args_iter.next())?,
            "--ref-level" | "-r" => config.ref_level = parse_value(arg, args_iter.next())?,
            "--decimation" | "-d" => config.decimation = parse_value(arg, args_iter.next())?,
            "--bandwidth" | "-b" => config.filter_bw = parse_value(arg, args_iter.next())?,
            "--samples" | "-n" => num_samples = Some(parse_value(arg, args_iter.next())?),
            "--output" | "-o" => {
                output = Some(
                    args_iter
                        .next()
                        .ok_or_else(|| format!("missing value for {}", arg))?
                        .clone(),
                )
            }
            "-v" => verbose += 1,
            "--help" | "-h" => return Err(usage()),
            other => return Err(format!("unknown argument '{}'\n{}", other, usage())),
        }
    }
    Ok(Options {
        config,
        num_samples,
        output,
        verbose,
    })
}

fn run(opts: Options) -> bb60c_rs::Result<u64> {
    // Shutdown flag that is set true when ctrl-c signal caught
    static SHUTDOWN: AtomicBool = AtomicBool::new(false);
    if let Err(e) = ctrlc::set_handler(|| SHUTDOWN.store(true, Ordering::Relaxed)) {
        error!("Error setting Ctrl-C handler: {}", e);
    }

    let mut out: Box<dyn Write> = match &opts.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut source = Bb60c::open_first_available(opts.config)?;
    let params = source.stream_parameters()?;
    info!(
        "Streaming at {} S/s, bandwidth {} Hz",
        params.sample_rate, params.bandwidth
    );

    let result = capture(
        &mut source,
        &mut out,
        DEFAULT_BUF_LENGTH,
        opts.num_samples,
        &SHUTDOWN,
    );
    info!("Close");
    source.stop()?;
    result
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let opts = match parse_args(&args) {
        Ok(opts) => opts,
        Err(msg) => {
            eprintln!("{}", msg);
            process::exit(2);
        }
    };

    // stdout may carry sample data, so log to stderr
    if let Err(e) = stderrlog::new().verbosity(opts.verbose).init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(opts) {
        Ok(n) => info!("Wrote {} samples", n),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
