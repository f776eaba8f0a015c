use std::fmt::Display;

use crate::{AnnotatedBar, KdjValue};

/// Comparison between a J value and a [`JFilter`] threshold.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Comparison {
    /// `J < threshold`.
    #[default]
    Below,
    /// `J <= threshold`.
    AtMost,
    /// `J >= threshold`.
    AtLeast,
    /// `J > threshold`.
    Above,
}

impl Comparison {
    /// Whether `value` stands in this relation to `threshold`.
    ///
    /// Always `false` when either side is NaN.
    #[inline]
    #[must_use]
    pub fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::Below => value < threshold,
            Self::AtMost => value <= threshold,
            Self::AtLeast => value >= threshold,
            Self::Above => value > threshold,
        }
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Below => "<",
            Self::AtMost => "<=",
            Self::AtLeast => ">=",
            Self::Above => ">",
        };
        f.write_str(symbol)
    }
}

/// Threshold predicate on the J line.
///
/// Defaults to `J < 0`, the oversold screen.
///
/// # Example
///
/// ```
/// use kdj_screener::{Comparison, JFilter};
///
/// let oversold = JFilter::default();
/// assert_eq!(oversold.comparison(), Comparison::Below);
/// assert_eq!(oversold.threshold(), 0.0);
///
/// // Signed form: negative means "at most |value|".
/// assert_eq!(JFilter::from_signed(-3), JFilter::at_most(3.0));
/// assert_eq!(JFilter::from_signed(80), JFilter::at_least(80.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JFilter {
    comparison: Comparison,
    threshold: f64,
}

impl JFilter {
    #[must_use]
    pub fn new(comparison: Comparison, threshold: f64) -> Self {
        Self {
            comparison,
            threshold,
        }
    }

    /// `J < threshold`.
    #[must_use]
    pub fn below(threshold: f64) -> Self {
        Self::new(Comparison::Below, threshold)
    }

    /// `J <= threshold`.
    #[must_use]
    pub fn at_most(threshold: f64) -> Self {
        Self::new(Comparison::AtMost, threshold)
    }

    /// `J >= threshold`.
    #[must_use]
    pub fn at_least(threshold: f64) -> Self {
        Self::new(Comparison::AtLeast, threshold)
    }

    /// `J > threshold`.
    #[must_use]
    pub fn above(threshold: f64) -> Self {
        Self::new(Comparison::Above, threshold)
    }

    /// Decodes the single signed-integer form used by quote-screen query
    /// strings.
    ///
    /// A positive value `v` selects `J >= v`, a negative value selects
    /// `J <= |v|`. Zero selects `J >= 0`.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        if value < 0 {
            Self::at_most(value.unsigned_abs() as f64)
        } else {
            Self::at_least(value as f64)
        }
    }

    #[inline]
    #[must_use]
    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    #[inline]
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether `value`'s J passes this filter.
    #[inline]
    #[must_use]
    pub fn matches(&self, value: KdjValue) -> bool {
        self.comparison.holds(value.j(), self.threshold)
    }
}

impl Default for JFilter {
    fn default() -> Self {
        Self::below(0.0)
    }
}

impl Display for JFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "J {} {}", self.comparison, self.threshold)
    }
}

/// Anything carrying an oscillator value that [`select`] can filter on.
pub trait Annotated {
    fn kdj(&self) -> KdjValue;
}

impl Annotated for KdjValue {
    #[inline]
    fn kdj(&self) -> KdjValue {
        *self
    }
}

impl<B> Annotated for AnnotatedBar<'_, B> {
    #[inline]
    fn kdj(&self) -> KdjValue {
        AnnotatedBar::kdj(self)
    }
}

/// Returns the items whose J passes `filter`, in input order.
///
/// The input is left untouched; an empty input yields an empty result.
///
/// # Example
///
/// ```
/// use kdj_screener::{JFilter, KdjValue, select};
///
/// let points = [
///     KdjValue::from_kd(5.0, 5.0),
///     KdjValue::from_kd(-2.0, -2.0),
///     KdjValue::from_kd(0.0, 0.0),
/// ];
///
/// let picked = select(&points, &JFilter::default());
/// assert_eq!(picked, vec![&points[1]]);
/// ```
#[must_use]
pub fn select<'a, T: Annotated>(items: &'a [T], filter: &JFilter) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| filter.matches(item.kdj()))
        .collect()
}
