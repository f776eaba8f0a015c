/// A price value.
///
/// Semantic alias for [`f64`]. Documents intent in function signatures
/// without introducing newtype construction overhead.
pub type Price = f64;

/// Bar open timestamp or sequence number.
///
/// Expected to be strictly increasing within one instrument's series.
pub type Timestamp = u64;

/// OHLCV bar data used as input to the oscillator.
///
/// Implement this on your own kline/candle type to avoid per-bar
/// conversion. The engine reads [`high`](Ohlcv::high), [`low`](Ohlcv::low)
/// and [`close`](Ohlcv::close); [`open_time`](Ohlcv::open_time) is only
/// checked for ordering.
///
/// # Example
///
/// ```
/// use kdj_screener::{Ohlcv, Price, Timestamp};
///
/// struct MyKline {
///     o: f64, h: f64, l: f64, c: f64,
///     ts: u64,
/// }
///
/// impl Ohlcv for MyKline {
///     fn open(&self) -> Price { self.o }
///     fn high(&self) -> Price { self.h }
///     fn low(&self) -> Price { self.l }
///     fn close(&self) -> Price { self.c }
///     fn open_time(&self) -> Timestamp { self.ts }
/// }
/// ```
pub trait Ohlcv {
    /// Opening price of the bar.
    fn open(&self) -> Price;

    /// Highest price during the bar.
    fn high(&self) -> Price;

    /// Lowest price during the bar.
    fn low(&self) -> Price;

    /// Closing (or latest) price of the bar.
    ///
    /// Normally within `[low, high]`, but the engine does not rely on it.
    fn close(&self) -> Price;

    /// Bar open timestamp or sequence number.
    fn open_time(&self) -> Timestamp;

    /// Trade volume during the bar. Defaults to `0.0`.
    ///
    /// Informational only, the oscillator ignores it.
    fn volume(&self) -> f64 {
        0.0
    }
}

/// One daily (or periodic) snapshot of a single instrument.
///
/// An owned [`Ohlcv`] implementation for callers that do not have their own
/// candle type, e.g. rows decoded from a quote provider.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceBar {
    /// Instrument identifier, e.g. `"600519"`.
    pub symbol: String,
    /// Human-readable instrument name, if the source provides one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    pub open_time: Timestamp,
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
    pub volume: f64,
}

impl PriceBar {
    /// Creates a bar with no display name and zero volume.
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        open_time: Timestamp,
        high: Price,
        low: Price,
        close: Price,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: None,
            open_time,
            open: close,
            high,
            low,
            close,
            volume: 0.0,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_open(mut self, open: Price) -> Self {
        self.open = open;
        self
    }

    #[must_use]
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }
}

impl Ohlcv for PriceBar {
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
