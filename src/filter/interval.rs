//! Numeric intervals with per-bound openness.

/// An interval over `f64` with optional bounds.
///
/// A missing bound is unbounded in that direction. Each bound is either
/// closed (the boundary value is inside) or open.
///
/// # Examples
///
/// ```
/// use nlprep::filter::Interval;
///
/// let closed = Interval::new(Some(2.0), Some(5.0), false);
/// assert!(closed.contains(2.0));
/// assert!(closed.contains(5.0));
///
/// let open = Interval::new(Some(2.0), Some(5.0), true);
/// assert!(!open.contains(2.0));
/// assert!(open.contains(3.0));
///
/// let half_open = Interval::new(Some(2.0), Some(5.0), false).with_upper_open(true);
/// assert!(half_open.contains(2.0));
/// assert!(!half_open.contains(5.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Interval {
    /// Lower bound, unbounded if `None`
    pub lower: Option<f64>,
    /// Upper bound, unbounded if `None`
    pub upper: Option<f64>,
    /// Whether the lower bound itself is excluded
    pub lower_open: bool,
    /// Whether the upper bound itself is excluded
    pub upper_open: bool,
}

impl Interval {
    /// Create an interval whose bounds are both open or both closed.
    pub fn new(lower: Option<f64>, upper: Option<f64>, open: bool) -> Self {
        Interval {
            lower,
            upper,
            lower_open: open,
            upper_open: open,
        }
    }

    /// The interval containing every number.
    pub fn unbounded() -> Self {
        Interval::default()
    }

    /// Set whether the lower bound is excluded.
    pub fn with_lower_open(mut self, open: bool) -> Self {
        self.lower_open = open;
        self
    }

    /// Set whether the upper bound is excluded.
    pub fn with_upper_open(mut self, open: bool) -> Self {
        self.upper_open = open;
        self
    }

    /// Whether `x` lies inside the interval.
    pub fn contains(&self, x: f64) -> bool {
        let above_lower = match self.lower {
            None => true,
            Some(lower) if self.lower_open => lower < x,
            Some(lower) => lower <= x,
        };
        let below_upper = match self.upper {
            None => true,
            Some(upper) if self.upper_open => x < upper,
            Some(upper) => x <= upper,
        };
        above_lower && below_upper
    }
}
