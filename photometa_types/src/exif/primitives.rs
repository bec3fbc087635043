/// The value a rational decodes to when its denominator is zero.
///
/// Exif writers use `0/0` to say "unknown", so this is a value, not an error.
pub const UNDEFINED_RATIONAL: f64 = f64::NAN;

/// A fraction that can't be negative.
///
/// Both the numerator (top number) and denominator (bottom number) are always
/// positive numbers.
#[repr(C)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct Rational {
    pub numerator: u32,
    pub denominator: u32,
}

impl Rational {
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Decodes the fraction into a float.
    ///
    /// ```
    /// use photometa_types::exif::primitives::Rational;
    ///
    /// assert_eq!(Rational::new(1, 2).to_f64(), 0.5);
    /// assert!(Rational::new(1, 0).to_f64().is_nan());
    /// ```
    pub fn to_f64(&self) -> f64 {
        decode_rational(self.numerator.into(), self.denominator.into())
    }
}

/// A signed fraction.
///
/// Both the numerator (top number) and denominator (bottom number) can be
/// negative.
#[repr(C)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct SRational {
    pub numerator: i32,
    pub denominator: i32,
}

impl SRational {
    pub const fn new(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Decodes the fraction into a float.
    ///
    /// ```
    /// use photometa_types::exif::primitives::SRational;
    ///
    /// assert_eq!(SRational::new(-1, 4).to_f64(), -0.25);
    /// ```
    pub fn to_f64(&self) -> f64 {
        decode_rational(self.numerator.into(), self.denominator.into())
    }
}

/// Divides `numerator` by `denominator`.
///
/// A zero denominator yields [`UNDEFINED_RATIONAL`].
pub fn decode_rational(numerator: i64, denominator: i64) -> f64 {
    if denominator == 0 {
        return UNDEFINED_RATIONAL;
    }

    numerator as f64 / denominator as f64
}
