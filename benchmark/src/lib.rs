use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::io::{self, prelude::*};
use std::time::UNIX_EPOCH;

/// Settings shared by the window benchmarks.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Number of samples kept in the sliding window.
    pub window: usize,
    /// Number of samples streamed through the window.
    pub samples: u64,
    /// Prefix of the generated csv file.
    pub output: String,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            window: 60,
            samples: 100_000,
            output: "window".to_string(),
        }
    }
}

impl BenchmarkConfig {
    /// Overrides the defaults with the positional arguments: `<window> <samples> <output>`.
    pub fn from_args() -> Self {
        let mut config = Self::default();
        let mut args = env::args();
        args.next();

        if let Some(window) = args.next().and_then(|arg| arg.parse().ok()) {
            config.window = window;
        }
        if let Some(samples) = args.next().and_then(|arg| arg.parse().ok()) {
            config.samples = samples;
        }
        if let Some(output) = args.next() {
            config.output = output;
        }

        config
    }
}

/// Deterministic noisy signal, so every benchmark streams the same samples.
pub fn sample(tick: u64) -> i32 {
    let noise = tick.wrapping_mul(2_654_435_761) % 200;
    ((tick % 1000) as i32) + noise as i32 - 100
}

pub fn save_to_csv_f64(hashmap: HashMap<u64, f64>, filename: &str) -> io::Result<()> {
    let millis = UNIX_EPOCH.elapsed().map(|elapsed| elapsed.as_millis()).unwrap_or_default();
    let filename = format!("{}_{}.csv", filename, millis);
    let mut file = File::create(filename)?;

    let mut values: Vec<(&u64, &f64)> = hashmap.iter().collect();
    values.sort_by(|x, y| x.0.cmp(y.0));
    for (&key, &value) in values.iter() {
        file.write_all(format!("{}, {}\n", key, value).as_bytes())?;
    }

    Ok(())
}
