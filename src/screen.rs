use tracing::debug;

use crate::{AnnotatedBar, JFilter, KdjConfig, Ohlcv, annotate::latest};

/// Result of screening a universe of instruments.
#[derive(Debug)]
pub struct Screening<'a, B> {
    matches: Vec<AnnotatedBar<'a, B>>,
    scanned: usize,
}

impl<'a, B> Screening<'a, B> {
    /// Latest bar of every instrument that passed the filter, in universe
    /// order.
    #[must_use]
    pub fn matches(&self) -> &[AnnotatedBar<'a, B>] {
        &self.matches
    }

    #[must_use]
    pub fn into_matches(self) -> Vec<AnnotatedBar<'a, B>> {
        self.matches
    }

    /// Number of non-empty series that were evaluated.
    #[must_use]
    pub fn scanned(&self) -> usize {
        self.scanned
    }
}

/// Screens a universe of instruments on their most recent J value.
///
/// Every item of `universe` is one instrument's chronological series. Each is
/// computed independently with `config`; its latest annotated bar is kept
/// when it passes `filter`. Empty series are skipped.
///
/// # Example
///
/// ```
/// use kdj_screener::{JFilter, KdjConfig, PriceBar, screen};
///
/// let falling = vec![
///     PriceBar::new("000001", 1, 12.0, 10.0, 11.5),
///     PriceBar::new("000001", 2, 11.0, 9.0, 9.1),
///     PriceBar::new("000001", 3, 9.5, 8.0, 8.1),
/// ];
/// let rising = vec![
///     PriceBar::new("600000", 1, 10.0, 9.0, 9.2),
///     PriceBar::new("600000", 2, 11.0, 9.5, 10.9),
///     PriceBar::new("600000", 3, 12.0, 10.5, 11.9),
/// ];
///
/// let universe = [falling.as_slice(), rising.as_slice()];
/// let screening = screen(universe, KdjConfig::default(), &JFilter::default());
///
/// assert_eq!(screening.scanned(), 2);
/// assert_eq!(screening.matches().len(), 1);
/// assert_eq!(screening.matches()[0].bar().symbol, "000001");
/// ```
pub fn screen<'a, B, I>(universe: I, config: KdjConfig, filter: &JFilter) -> Screening<'a, B>
where
    B: Ohlcv + 'a,
    I: IntoIterator<Item = &'a [B]>,
{
    let mut matches = Vec::new();
    let mut scanned = 0;
    let mut skipped = 0;

    for series in universe {
        let Some(last) = latest(series, config) else {
            skipped += 1;
            continue;
        };

        scanned += 1;
        if filter.matches(last.kdj()) {
            matches.push(last);
        }
    }

    debug!(
        scanned,
        skipped,
        matched = matches.len(),
        %config,
        %filter,
        "screened universe"
    );

    Screening { matches, scanned }
}
