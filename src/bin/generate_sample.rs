use std::io::Write;

use anyhow::{Context, Result};

const OUTPUT_PATH: &str = "sample_humidity.csv";
const ROWS: usize = 500;
const SEED: u64 = 42;
const START_HUMIDITY: i64 = 55;

/// xorshift64* stepping a humidity value by -2..=2 per sample.
struct HumidityWalk {
    state: u64,
    humidity: i64,
}

impl HumidityWalk {
    fn new(seed: u64, start: i64) -> Self {
        Self {
            state: seed.max(1),
            humidity: start.clamp(0, 100),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }
}

impl Iterator for HumidityWalk {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let current = self.humidity;
        let step = (self.next_u64() % 5) as i64 - 2;
        self.humidity = (current + step).clamp(0, 100);
        Some(current)
    }
}

/// Write one "<seconds>, <humidity>" row per reading, like the hygrometer log.
fn write_log<W: Write>(out: W, readings: &[i64]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    for (second, humidity) in readings.iter().enumerate() {
        writer
            .write_record([second.to_string(), format!(" {humidity}")])
            .context("writing sample row")?;
    }
    writer.flush().context("flushing sample rows")?;
    Ok(())
}

fn main() -> Result<()> {
    let readings: Vec<i64> = HumidityWalk::new(SEED, START_HUMIDITY).take(ROWS).collect();
    let file = std::fs::File::create(OUTPUT_PATH)
        .with_context(|| format!("creating {OUTPUT_PATH}"))?;
    write_log(file, &readings)?;

    println!("Wrote {ROWS} humidity readings to {OUTPUT_PATH}");
    Ok(())
}
