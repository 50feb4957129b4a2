use alto_logger::TermLogger;
use benchmark::{sample, save_to_csv_f64, BenchmarkConfig};
use fixed_queue::{FixedQueue, QueueError, RingQueue};
use std::collections::HashMap;
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    TermLogger::default().init().expect("Failed to initialize logger.");

    let config = BenchmarkConfig::from_args();
    log::info!("Streaming {} samples through a window of {}", config.samples, config.window);

    let start = Instant::now();
    let result = run(&config)?;
    log::info!("Fixed queue window took {} microseconds", start.elapsed().as_micros());

    save_to_csv_f64(result, &format!("{}_fixed_queue", config.output))?;
    Ok(())
}

fn run(config: &BenchmarkConfig) -> Result<HashMap<u64, f64>, QueueError> {
    let mut window: FixedQueue<i32> = FixedQueue::with_capacity(config.window);
    let mut result = HashMap::new();

    for tick in 0..config.samples {
        window.push_back(sample(tick));
        if window.is_empty() || !window.is_full() {
            continue;
        }

        let avg: f64 = window.avg()?;
        let spread = window.max(0)? - window.min(0)?;
        log::trace!("Tick {}: avg {}, spread {}", tick, avg, spread);
        result.insert(tick, avg);
    }

    Ok(result)
}
