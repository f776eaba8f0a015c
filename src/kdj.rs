use std::{fmt::Display, num::NonZero};

use tracing::{trace, warn};

use crate::{Error, Ohlcv, Price, Result, Timestamp, extrema::ExtremaWindow};

/// K and D at the first bar of every series, regardless of its prices.
const INITIAL_VALUE: f64 = 50.0;

const PRIOR_WEIGHT: f64 = 2.0 / 3.0;
const INPUT_WEIGHT: f64 = 1.0 / 3.0;

/// Ranges at or below this are treated as flat.
const RANGE_EPSILON: Price = 1e-9;

/// Configuration for the [`Kdj`] oscillator.
///
/// Holds the lookback window used for the lowest-low / highest-high range.
/// The conventional window is 9 bars, which is what [`KdjConfig::default`]
/// returns.
///
/// # Example
///
/// ```
/// use kdj_screener::KdjConfig;
/// use std::num::NonZero;
///
/// let config = KdjConfig::builder()
///     .length(NonZero::new(14).unwrap())
///     .build();
/// assert_eq!(config.length(), 14);
///
/// assert_eq!(KdjConfig::default().length(), 9);
/// assert!(KdjConfig::try_from(0).is_err());
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct KdjConfig {
    length: NonZero<usize>,
}

impl KdjConfig {
    /// Creates a config with the given window length.
    #[must_use]
    pub fn new(length: NonZero<usize>) -> Self {
        Self { length }
    }

    /// Returns a new builder, starting from the default window length.
    #[must_use]
    pub fn builder() -> KdjConfigBuilder {
        KdjConfigBuilder::new()
    }

    /// Window length (number of bars).
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.length.get()
    }
}

impl Default for KdjConfig {
    /// KDJ(9).
    fn default() -> Self {
        Self::new(const { NonZero::new(9).unwrap() })
    }
}

impl TryFrom<usize> for KdjConfig {
    type Error = Error;

    /// Fails with [`Error::InvalidConfiguration`] for a zero length.
    fn try_from(length: usize) -> Result<Self> {
        NonZero::new(length)
            .map(Self::new)
            .ok_or(Error::InvalidConfiguration { length })
    }
}

impl Display for KdjConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KdjConfig({})", self.length)
    }
}

/// Builder for [`KdjConfig`].
///
/// Defaults: length = 9.
pub struct KdjConfigBuilder {
    length: NonZero<usize>,
}

impl KdjConfigBuilder {
    fn new() -> Self {
        Self {
            length: KdjConfig::default().length,
        }
    }

    /// Sets the lookback window length.
    #[inline]
    #[must_use]
    pub fn length(mut self, length: NonZero<usize>) -> Self {
        self.length = length;
        self
    }

    #[inline]
    #[must_use]
    pub fn build(self) -> KdjConfig {
        KdjConfig {
            length: self.length,
        }
    }
}

/// Oscillator output for one bar: K, D and J.
///
/// None of the three is clamped. K and D usually stay near `[0, 100]`, but a
/// close outside the window range pushes them beyond it. J amplifies the K/D
/// divergence and routinely leaves that range:
///
/// ```text
/// J = 3 × K − 2 × D
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KdjValue {
    k: f64,
    d: f64,
    j: f64,
}

impl KdjValue {
    /// Builds a value from K and D, deriving J.
    #[inline]
    #[must_use]
    pub fn from_kd(k: f64, d: f64) -> Self {
        Self {
            k,
            d,
            j: 3.0 * k - 2.0 * d,
        }
    }

    /// Smoothed raw stochastic value.
    #[inline]
    #[must_use]
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Smoothed K.
    #[inline]
    #[must_use]
    pub fn d(&self) -> f64 {
        self.d
    }

    /// `3 × K − 2 × D`.
    #[inline]
    #[must_use]
    pub fn j(&self) -> f64 {
        self.j
    }
}

impl Display for KdjValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KDJ(k: {}, d: {}, j: {})", self.k, self.d, self.j)
    }
}

/// KDJ stochastic oscillator.
///
/// For every bar, the raw stochastic value locates the close within the
/// trailing lowest-low / highest-high range:
///
/// ```text
/// RSV = (close − lowest_low) / (highest_high − lowest_low) × 100
/// ```
///
/// and is smoothed twice with `(2/3, 1/3)` weights:
///
/// ```text
/// K = 2/3 × K_prev + 1/3 × RSV
/// D = 2/3 × D_prev + 1/3 × K
/// ```
///
/// The first bar is pinned to `K = D = 50`. Windows shorter than the
/// configured length at the start of the series are clipped rather than
/// skipped, so every bar gets a value. A flat (or inverted) range yields
/// `RSV = 0`.
///
/// Each call to [`compute`](Kdj::compute) recomputes the whole series; no
/// state is carried between calls.
///
/// # Example
///
/// ```
/// use kdj_screener::{Kdj, KdjConfig, PriceBar};
///
/// let bars = vec![
///     PriceBar::new("600000", 1, 10.0, 5.0, 8.0),
///     PriceBar::new("600000", 2, 12.0, 6.0, 12.0),
/// ];
///
/// let values = Kdj::new(KdjConfig::default()).compute(&bars);
///
/// assert_eq!(values.len(), 2);
/// assert_eq!(values[0].k(), 50.0);
/// assert!(values[1].j() > values[1].k());
/// ```
#[derive(Clone, Debug)]
pub struct Kdj {
    config: KdjConfig,
}

impl Kdj {
    #[must_use]
    pub fn new(config: KdjConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> KdjConfig {
        self.config
    }

    /// Computes one [`KdjValue`] per bar, position-aligned with `series`.
    ///
    /// Bars are taken in slice order. Out-of-order timestamps are logged but
    /// do not change the result.
    #[must_use]
    pub fn compute<B: Ohlcv>(&self, series: &[B]) -> Vec<KdjValue> {
        let (values, out_of_order) = self.scan(series);

        if out_of_order > 0 {
            warn!(
                bars = series.len(),
                out_of_order, "series timestamps are not strictly increasing"
            );
        }

        trace!(bars = series.len(), length = self.config.length(), "computed KDJ series");

        values
    }

    /// One pass over `series`: the values, plus the number of bars whose
    /// timestamp does not exceed the previous bar's.
    fn scan<B: Ohlcv>(&self, series: &[B]) -> (Vec<KdjValue>, usize) {
        let mut window = ExtremaWindow::new(self.config.length());
        let mut values = Vec::with_capacity(series.len());
        let mut prev: Option<KdjValue> = None;
        let mut last_time: Option<Timestamp> = None;
        let mut out_of_order = 0;

        for bar in series {
            let time = bar.open_time();
            if last_time.is_some_and(|last| time <= last) {
                out_of_order += 1;
            }
            last_time = Some(time);

            window.add(bar);

            let value = match prev {
                None => KdjValue::from_kd(INITIAL_VALUE, INITIAL_VALUE),
                Some(prev) => {
                    let rsv = Self::rsv(bar.close(), window.lowest_low(), window.highest_high());
                    let k = PRIOR_WEIGHT * prev.k + INPUT_WEIGHT * rsv;
                    let d = PRIOR_WEIGHT * prev.d + INPUT_WEIGHT * k;
                    KdjValue::from_kd(k, d)
                }
            };

            values.push(value);
            prev = Some(value);
        }

        (values, out_of_order)
    }

    #[inline]
    fn rsv(close: Price, lowest_low: Option<Price>, highest_high: Option<Price>) -> f64 {
        match (lowest_low, highest_high) {
            (Some(low), Some(high)) if high - low > RANGE_EPSILON => {
                (close - low) / (high - low) * 100.0
            }
            _ => 0.0,
        }
    }
}

impl Display for Kdj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KDJ({})", self.config.length)
    }
}

/// Computes the oscillator over `series` with a `window_length`-bar lookback.
///
/// Fails with [`Error::InvalidConfiguration`] only when `window_length` is
/// zero; no output is produced in that case. Any bar data, however
/// degenerate, yields numeric values.
///
/// # Errors
///
/// Returns [`Error::InvalidConfiguration`] if `window_length < 1`.
///
/// # Example
///
/// ```
/// use kdj_screener::{Error, PriceBar, compute};
///
/// let bars = vec![PriceBar::new("000001", 1, 11.0, 10.0, 10.5)];
///
/// assert_eq!(compute(&bars, 9).unwrap().len(), 1);
/// assert_eq!(
///     compute(&bars, 0),
///     Err(Error::InvalidConfiguration { length: 0 })
/// );
/// ```
pub fn compute<B: Ohlcv>(series: &[B], window_length: usize) -> Result<Vec<KdjValue>> {
    let config = KdjConfig::try_from(window_length)?;

    Ok(Kdj::new(config).compute(series))
}
