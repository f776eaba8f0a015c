use std::fmt::Display;

use crate::{Kdj, KdjConfig, KdjValue, Ohlcv};

/// A bar paired with the oscillator value computed at its position.
///
/// Borrows the bar from the series it was computed over, so annotating a
/// series copies no price data. Immutable once produced.
///
/// With the `serde` feature, serializes as the bar's own fields plus a `kdj`
/// object.
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AnnotatedBar<'a, B> {
    #[cfg_attr(feature = "serde", serde(flatten))]
    bar: &'a B,
    kdj: KdjValue,
}

impl<B> Clone for AnnotatedBar<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for AnnotatedBar<'_, B> {}

impl<'a, B> AnnotatedBar<'a, B> {
    #[inline]
    #[must_use]
    pub fn bar(&self) -> &'a B {
        self.bar
    }

    #[inline]
    #[must_use]
    pub fn kdj(&self) -> KdjValue {
        self.kdj
    }
}

impl<B: Ohlcv> Display for AnnotatedBar<'_, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.kdj, self.bar.open_time())
    }
}

/// Pairs every bar of `series` with its oscillator value, by position.
///
/// # Example
///
/// ```
/// use kdj_screener::{KdjConfig, PriceBar, annotate};
///
/// let bars = vec![
///     PriceBar::new("600000", 1, 10.0, 5.0, 8.0),
///     PriceBar::new("600000", 2, 12.0, 6.0, 12.0),
/// ];
///
/// let annotated = annotate(&bars, KdjConfig::default());
///
/// assert_eq!(annotated.len(), 2);
/// assert_eq!(annotated[1].bar().open_time, 2);
/// ```
#[must_use]
pub fn annotate<B: Ohlcv>(series: &[B], config: KdjConfig) -> Vec<AnnotatedBar<'_, B>> {
    Kdj::new(config)
        .compute(series)
        .into_iter()
        .zip(series)
        .map(|(kdj, bar)| AnnotatedBar { bar, kdj })
        .collect()
}

/// The most recent bar of `series` with its oscillator value.
///
/// Returns `None` for an empty series. The whole series is still computed,
/// since the recurrence starts from the first bar.
#[must_use]
pub fn latest<B: Ohlcv>(series: &[B], config: KdjConfig) -> Option<AnnotatedBar<'_, B>> {
    let bar = series.last()?;
    let kdj = Kdj::new(config).compute(series).pop()?;

    Some(AnnotatedBar { bar, kdj })
}
