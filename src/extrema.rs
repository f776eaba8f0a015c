use crate::{Ohlcv, Price};
use std::collections::VecDeque;

/// Trailing lowest-low / highest-high over the last `size` bars.
///
/// Windows are clipped at the start of the series: before `size` bars have
/// been added, the extrema cover every bar seen so far.
///
/// Backed by two monotonic deques of `(position, price)`, so each bar is
/// pushed and popped at most once. The front of `lows` is the window minimum
/// and the front of `highs` the window maximum; among equal prices the
/// earliest bar wins.
///
/// The result is identical to rescanning the window from its first bar with
/// strict comparisons, NaN included: a NaN price is skipped unless it belongs
/// to the window's first bar, in which case that extremum is NaN.
#[derive(Clone, Debug)]
pub(crate) struct ExtremaWindow {
    size: usize,
    position: usize,
    start: usize,
    lows: VecDeque<(usize, Price)>,
    highs: VecDeque<(usize, Price)>,
    nan_lows: VecDeque<(usize, Price)>,
    nan_highs: VecDeque<(usize, Price)>,
}

impl ExtremaWindow {
    pub fn new(size: usize) -> Self {
        debug_assert!(size > 0, "window size must be positive");

        Self {
            size,
            position: 0,
            start: 0,
            lows: VecDeque::with_capacity(size),
            highs: VecDeque::with_capacity(size),
            nan_lows: VecDeque::new(),
            nan_highs: VecDeque::new(),
        }
    }

    #[inline]
    pub fn add(&mut self, ohlcv: &impl Ohlcv) {
        let position = self.position;
        let (low, high) = (ohlcv.low(), ohlcv.high());

        if low.is_nan() {
            self.nan_lows.push_back((position, low));
        } else {
            while self.lows.back().is_some_and(|&(_, l)| l > low) {
                self.lows.pop_back();
            }
            self.lows.push_back((position, low));
        }

        if high.is_nan() {
            self.nan_highs.push_back((position, high));
        } else {
            while self.highs.back().is_some_and(|&(_, h)| h < high) {
                self.highs.pop_back();
            }
            self.highs.push_back((position, high));
        }

        let start = (position + 1).saturating_sub(self.size);
        for deque in [
            &mut self.lows,
            &mut self.highs,
            &mut self.nan_lows,
            &mut self.nan_highs,
        ] {
            while deque.front().is_some_and(|&(p, _)| p < start) {
                deque.pop_front();
            }
        }

        self.start = start;
        self.position += 1;
    }

    /// Minimum low over the current window, `None` before the first bar.
    #[inline]
    pub fn lowest_low(&self) -> Option<Price> {
        self.extremum(&self.lows, &self.nan_lows)
    }

    /// Maximum high over the current window, `None` before the first bar.
    #[inline]
    pub fn highest_high(&self) -> Option<Price> {
        self.extremum(&self.highs, &self.nan_highs)
    }

    fn extremum(
        &self,
        ordered: &VecDeque<(usize, Price)>,
        nans: &VecDeque<(usize, Price)>,
    ) -> Option<Price> {
        match nans.front() {
            Some(&(p, nan)) if p == self.start => Some(nan),
            _ => ordered.front().map(|&(_, price)| price),
        }
    }
}
