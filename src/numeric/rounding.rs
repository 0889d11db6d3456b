// ============================================================================
// Rounding Policies
// Half-up and half-to-even rounding to a fixed number of decimal places
// ============================================================================

/// Rounding policy applied to every intermediate and memory result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Round halves toward positive infinity (standard rounding)
    #[default]
    HalfUp,
    /// Round exact halves to the nearest even digit (bankers' rounding)
    HalfEven,
}

impl RoundingMode {
    /// Select the policy from the persisted `roundBankers` flag.
    #[inline]
    pub fn from_bankers(bankers: bool) -> Self {
        if bankers {
            RoundingMode::HalfEven
        } else {
            RoundingMode::HalfUp
        }
    }

    /// Round `x` to `places` decimal places under this policy.
    #[inline]
    pub fn apply(self, x: f64, places: u8) -> f64 {
        match self {
            RoundingMode::HalfUp => round_half_up(x, places),
            RoundingMode::HalfEven => round_half_to_even(x, places),
        }
    }
}

/// Round `x` to `places` decimal places.
///
/// Non-finite values (±infinity, NaN) are returned unchanged so that
/// division by zero survives rounding and reaches the display as an error.
///
/// # Example
/// ```
/// use calculator_engine::numeric::round;
///
/// assert_eq!(round(2.5, 0, true), 2.0);
/// assert_eq!(round(2.5, 0, false), 3.0);
/// ```
#[inline]
pub fn round(x: f64, places: u8, bankers: bool) -> f64 {
    RoundingMode::from_bankers(bankers).apply(x, places)
}

/// Standard half-up rounding.
///
/// A machine-epsilon bias is added before scaling so that values such as
/// `1.005` (stored as `1.00499999...`) still round up.
pub fn round_half_up(x: f64, places: u8) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let scale = scale_for(places);
    round_half_toward_positive((x + f64::EPSILON) * scale) / scale
}

/// Round-half-to-even (bankers' rounding).
///
/// Only a scaled remainder within epsilon of exactly `0.5` is treated as a tie;
/// anything else falls back to standard rounding of the scaled value.
pub fn round_half_to_even(x: f64, places: u8) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let scale = scale_for(places);
    let scaled = x * scale;
    let floor = scaled.floor();
    let remainder = scaled - floor;

    if (remainder - 0.5).abs() < f64::EPSILON {
        let even = if floor % 2.0 == 0.0 { floor } else { floor + 1.0 };
        return even / scale;
    }

    round_half_toward_positive(scaled) / scale
}

#[inline]
fn scale_for(places: u8) -> f64 {
    10f64.powi(i32::from(places))
}

/// Nearest integer, ties resolved toward positive infinity.
///
/// `-2.5` becomes `-2`, `2.5` becomes `3`.
#[inline]
fn round_half_toward_positive(v: f64) -> f64 {
    let floor = v.floor();
    if v - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
