/// Settings threaded through the reduction engine and Buchberger's algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Coefficients with an absolute value at most `tolerance` are treated as
    /// zero. Exact coefficient rings ignore it.
    pub tolerance: f64,
}

impl Config {
    /// Settings for exact arithmetic.
    pub fn exact() -> Config {
        Config { tolerance: 0. }
    }

    /// Settings for inexact coefficients.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance` is negative or NaN.
    pub fn with_tolerance(tolerance: f64) -> Config {
        assert!(
            tolerance >= 0.,
            "tolerance must be a non-negative number, got {}",
            tolerance
        );
        Config { tolerance }
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::exact()
    }
}
