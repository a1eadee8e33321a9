use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

/// One output row, written with the same headers the dashboard reads.
#[derive(Debug, Serialize)]
struct SampleRow<'a> {
    #[serde(rename = "Indicator")]
    indicator: &'a str,
    #[serde(rename = "Year")]
    year: i32,
    /// Blank cell when `None`.
    #[serde(rename = "Growth Rate")]
    growth_rate: Option<f64>,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Shock applied to every indicator in a given year (e.g. 2020).
fn shock(year: i32) -> f64 {
    match year {
        2009 => -2.0,
        2020 => -9.0,
        2021 => 4.0,
        _ => 0.0,
    }
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("cleaned_growth_data.csv"));

    let mut rng = SimpleRng::new(42);

    // (indicator, trend growth %, volatility)
    let indicators = [
        ("GDP Growth", 3.5, 1.2),
        ("Agriculture Growth", 2.0, 8.0),
        ("Industry Growth", 3.0, 2.0),
        ("Services Growth", 4.0, 1.5),
    ];
    let years = 2000..=2023;

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;

    let mut written = 0usize;
    for &(indicator, trend, volatility) in &indicators {
        for year in years.clone() {
            // Roughly one value in twenty is left blank.
            let growth_rate = if rng.next_f64() < 0.05 {
                None
            } else {
                let value = rng.gauss(trend, volatility) + shock(year);
                Some((value * 100.0).round() / 100.0)
            };

            writer
                .serialize(SampleRow {
                    indicator,
                    year,
                    growth_rate,
                })
                .with_context(|| format!("writing {indicator} {year}"))?;
            written += 1;
        }
    }
    writer.flush().context("flushing CSV writer")?;

    println!(
        "Wrote {written} rows ({} indicators) to {}",
        indicators.len(),
        output_path.display()
    );
    Ok(())
}
