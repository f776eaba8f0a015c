#![allow(dead_code)]

use kdj_screener::{Ohlcv, Price, PriceBar, Timestamp};
use serde::{Deserialize, de::DeserializeOwned};

/// Daily OHLCV bar parsed from the fixture CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct RefBar {
    pub open_time: u64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Ohlcv for RefBar {
    fn open(&self) -> Price {
        self.open
    }

    fn high(&self) -> Price {
        self.high
    }

    fn low(&self) -> Price {
        self.low
    }

    fn close(&self) -> Price {
        self.close
    }

    fn open_time(&self) -> Timestamp {
        self.open_time
    }

    fn volume(&self) -> f64 {
        self.volume
    }
}

/// Reference K/D/J with timestamp.
#[derive(Debug, Deserialize)]
pub struct RefKdj {
    pub open_time: u64,
    pub k: f64,
    pub d: f64,
    pub j: f64,
}

const OHLCV_PATH: &str = "tests/fixtures/data/ohlcv-daily.csv";

/// Load the reference daily bars.
///
/// Bars 60..66 are flat (high = low = close) to exercise the zero-range path.
pub fn load_reference_ohlcvs() -> Vec<RefBar> {
    load_records(OHLCV_PATH, "invalid OHLCV record")
}

/// Load reference K/D/J values.
pub fn load_kdj_ref(path: &str) -> Vec<RefKdj> {
    load_records(path, "invalid KDJ reference record")
}

/// The reference bars as one instrument's [`PriceBar`] series.
pub fn as_price_bars(symbol: &str, bars: &[RefBar]) -> Vec<PriceBar> {
    bars.iter()
        .map(|b| {
            PriceBar::new(symbol, b.open_time, b.high, b.low, b.close)
                .with_open(b.open)
                .with_volume(b.volume)
        })
        .collect()
}

/// Splits the reference bars into `count` instruments of equal length,
/// each re-labelled with its own symbol.
pub fn universe(count: usize) -> Vec<Vec<PriceBar>> {
    let bars = load_reference_ohlcvs();
    let len = bars.len() / count;
    bars.chunks_exact(len)
        .enumerate()
        .map(|(i, chunk)| as_price_bars(&format!("{:06}", 600_000 + i), chunk))
        .collect()
}

/// Assert two f64 values are within tolerance.
pub fn assert_near(actual: f64, expected: f64, tolerance: f64, context: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{context}: expected {expected:.10}, got {actual:.10}, diff {diff:.2e} > tolerance {tolerance:.2e}"
    );
}

fn load_records<D>(path: &str, expect_msg: &str) -> Vec<D>
where
    D: DeserializeOwned,
{
    let mut rdr =
        csv::Reader::from_path(path).unwrap_or_else(|e| panic!("failed to open {path}: {e}"));

    rdr.deserialize().map(|r| r.expect(expect_msg)).collect()
}
