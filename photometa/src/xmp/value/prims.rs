use photometa_types::{
    exif::primitives::decode_rational,
    value::Scalar,
    xmp::XmpPrimitiveKind as Prim,
};
use winnow::{
    Parser as _,
    ascii::{dec_int, digit1},
    combinator::{opt, preceded},
    error::EmptyError,
    token::one_of,
};

use crate::{date::parse_xmp_date, xmp::error::XmpParsingError};

/// Parses a text value known to be a primitive of a certain kind.
///
/// This is also called with `prim: Prim::Text` when the kind isn't actually
/// known.
pub fn parse_primitive(text: String, prim: &Prim) -> Result<Scalar, XmpParsingError> {
    Ok(match prim {
        Prim::Text => Scalar::Text(text),

        Prim::Boolean => Scalar::Boolean(match text.trim() {
            "True" => true,
            "False" => false,
            other => {
                log::warn!("Encountered unknown boolean value: `{other}`.");
                return Err(XmpParsingError::PrimitiveUnknownBool(text));
            }
        }),

        Prim::Integer => match text.trim().parse::<i64>() {
            Ok(num) => Scalar::Integer(num),
            Err(e)
                if matches!(
                    e.kind(),
                    core::num::IntErrorKind::NegOverflow | core::num::IntErrorKind::PosOverflow
                ) =>
            {
                log::warn!(
                    "Given number too large for `i64`. Will be exposed as a `Prim::Text`. \
                    value: `{text}`"
                );
                Scalar::Text(text)
            }
            Err(e) => return Err(XmpParsingError::PrimitiveIntegerParseFail(text, e)),
        },

        Prim::Real => match text.trim().parse::<f64>() {
            Ok(num) => Scalar::Real(num),
            Err(e) => return Err(XmpParsingError::PrimitiveRealParseFail(text, e)),
        },

        Prim::Date => match parse_xmp_date(&text) {
            Some(ts) => Scalar::DateTime(ts),
            None => return Err(XmpParsingError::PrimitiveDateParseFail(text)),
        },

        Prim::Rational => match parse_rational(text.trim()) {
            Some(num) => Scalar::Real(num),
            None => return Err(XmpParsingError::PrimitiveRationalParseFail(text)),
        },

        Prim::GpsCoordinate => match gps_coordinate.parse(text.trim()) {
            Ok(degrees) => Scalar::Real(degrees),
            Err(_) => return Err(XmpParsingError::PrimitiveGpsCoordinateParseFail(text)),
        },
    })
}

/// Types a primitive, falling back to text when that fails.
///
/// XMP writers get types wrong all the time, and the raw text is still
/// useful to callers.
pub fn parse_primitive_or_text(text: String, prim: &Prim) -> Scalar {
    parse_primitive(text.clone(), prim)
        .inspect_err(|e| log::warn!("Keeping value as text. err: {e}"))
        .unwrap_or(Scalar::Text(text))
}

/// Parses XMP's rational text, `n/d`.
///
/// Some writers skip the fraction and write a plain number, so that's
/// accepted too.
fn parse_rational(text: &str) -> Option<f64> {
    let fraction = (dec_int::<_, i64, EmptyError>, '/', dec_int::<_, i64, EmptyError>)
        .map(|(numerator, _, denominator)| decode_rational(numerator, denominator))
        .parse(text);

    match fraction {
        Ok(num) => Some(num),
        Err(_) => text.parse::<f64>().ok(),
    }
}

/// An unsigned decimal number, like `40` or `26.7667`.
///
/// We don't use `winnow::ascii::float` here. It would read the `E` in a
/// coordinate like `74,0.36E` as an exponent.
fn unsigned_decimal(input: &mut &str) -> Result<f64, EmptyError> {
    (digit1, opt(('.', digit1)))
        .take()
        .parse_to()
        .parse_next(input)
}

/// Parses an XMP GPS coordinate into signed decimal degrees.
///
/// These look like `DDD,MM,SSk` or `DDD,MM.mmk`, where `k` is `N`, `S`, `E`,
/// or `W`. South and west are negative.
fn gps_coordinate(input: &mut &str) -> Result<f64, EmptyError> {
    let (degrees, _, minutes, seconds, hemisphere) = (
        unsigned_decimal,
        ',',
        unsigned_decimal,
        opt(preceded(',', unsigned_decimal)),
        one_of(['N', 'S', 'E', 'W']),
    )
        .parse_next(input)?;

    let magnitude = degrees + minutes / 60.0 + seconds.unwrap_or(0.0) / 3600.0;
    Ok(match hemisphere {
        'S' | 'W' => -magnitude,
        _ => magnitude,
    })
}
