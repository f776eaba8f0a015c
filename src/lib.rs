//! KDJ stochastic oscillator and J-line screening for equity price bars.
//!
//! [`Kdj`] turns one instrument's chronological series of bars into a
//! position-aligned series of [`KdjValue`]s. [`select`] and [`screen`] then
//! pick the points (or instruments) whose J value passes a [`JFilter`].
//!
//! Everything is recomputed from the supplied bars on every call; no state
//! survives between calls, so instruments can be processed on any thread in
//! any order.
//!
//! Input bars are any type implementing [`Ohlcv`]; [`PriceBar`] is provided
//! for callers without their own candle type. Configuration is the only thing
//! that can fail ([`Error::InvalidConfiguration`]), bar data never does.

mod annotate;
mod error;
mod extrema;
mod filter;
mod kdj;
mod ohlcv;
mod screen;

pub use crate::error::{Error, Result};
pub use crate::ohlcv::{Ohlcv, Price, PriceBar, Timestamp};

pub use crate::annotate::{AnnotatedBar, annotate, latest};
pub use crate::filter::{Annotated, Comparison, JFilter, select};
pub use crate::kdj::{Kdj, KdjConfig, KdjConfigBuilder, KdjValue, compute};
pub use crate::screen::{Screening, screen};

#[cfg(test)]
mod test_util;
