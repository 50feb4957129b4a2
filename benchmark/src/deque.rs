use alto_logger::TermLogger;
use benchmark::{sample, save_to_csv_f64, BenchmarkConfig};
use std::collections::{HashMap, VecDeque};
use std::time::Instant;

// Same window computation as the `window` binary, over a growable deque.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    TermLogger::default().init().expect("Failed to initialize logger.");

    let config = BenchmarkConfig::from_args();
    log::info!("Streaming {} samples through a window of {}", config.samples, config.window);

    let start = Instant::now();
    let result = run(&config);
    log::info!("VecDeque window took {} microseconds", start.elapsed().as_micros());

    save_to_csv_f64(result, &format!("{}_deque", config.output))?;
    Ok(())
}

fn run(config: &BenchmarkConfig) -> HashMap<u64, f64> {
    let mut window: VecDeque<i32> = VecDeque::with_capacity(config.window);
    let mut result = HashMap::new();

    for tick in 0..config.samples {
        if window.len() == config.window {
            window.pop_front();
        }
        window.push_back(sample(tick));
        if window.len() < config.window {
            continue;
        }

        let sum: f64 = window.iter().map(|&value| f64::from(value)).sum();
        let avg = sum / window.len() as f64;
        let max = window.iter().max().copied().unwrap_or_default();
        let min = window.iter().min().copied().unwrap_or_default();
        log::trace!("Tick {}: avg {}, spread {}", tick, avg, max - min);
        result.insert(tick, avg);
    }

    result
}
