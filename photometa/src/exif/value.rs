//! Turns raw Exif values into normalized [`Value`]s.

use photometa_types::{
    exif::{FieldTag, RawExifValue, tags::Decoding},
    value::{Scalar, Value},
};

use crate::{
    date::{parse_exif_date, parse_exif_datetime},
    exif::error::ExifValueError,
};

/// Decodes one field's raw value according to its tag.
///
/// This never fails. When a tag's special decoding doesn't fit the raw
/// value, the value is decoded by its shape instead.
pub fn decode_field(tag: &FieldTag, raw: &RawExifValue) -> Value {
    let decoding: Decoding = match tag {
        FieldTag::Known(known) => known.decoding(),
        FieldTag::Unknown(_) => Decoding::Auto,
    };

    decode_with(tag, decoding, raw)
        .inspect_err(|e| log::warn!("Falling back to plain decoding. err: {e}"))
        .unwrap_or_else(|_| decode_auto(raw))
}

/// Decodes a raw value with the given decoding.
fn decode_with(
    tag: &FieldTag,
    decoding: Decoding,
    raw: &RawExifValue,
) -> Result<Value, ExifValueError> {
    let shape_err = |expected: &'static str| ExifValueError::UnexpectedShape {
        tag: tag.name(),
        expected,
    };

    match decoding {
        Decoding::Auto | Decoding::SubIfd => Ok(decode_auto(raw)),

        Decoding::DateTime | Decoding::Date => {
            let text: String = raw_text(raw).ok_or_else(|| shape_err("date text"))?;
            let parsed = match decoding {
                Decoding::Date => parse_exif_date(&text),
                _ => parse_exif_datetime(&text),
            };

            parsed
                .map(|ts| Value::Scalar(Scalar::DateTime(ts)))
                .ok_or(ExifValueError::UnparsableDate {
                    tag: tag.name(),
                    text,
                })
        }

        Decoding::GpsCoordinate => {
            let parts: Vec<f64> = raw_reals(raw).ok_or_else(|| shape_err("rationals"))?;
            match parts.as_slice() {
                [_, _, _] | [_, _] | [_] => {
                    Ok(Value::Scalar(Scalar::Real(gps_decimal_degrees(&parts, None))))
                }
                _ => Err(shape_err("a degrees/minutes/seconds triplet")),
            }
        }

        Decoding::GpsTime => match raw_reals(raw).as_deref() {
            Some([hours, minutes, seconds]) => Ok(Value::text(format_gps_time(
                *hours, *minutes, *seconds,
            ))),
            _ => Err(shape_err("an hours/minutes/seconds triplet")),
        },

        Decoding::Version => {
            let parts: Vec<i64> = match raw {
                RawExifValue::Bytes(b) => b.iter().map(|n| i64::from(*n)).collect(),
                RawExifValue::IntegerList(list) => list.clone(),
                _ => return Err(shape_err("version bytes")),
            };

            Ok(Value::text(
                parts
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join("."),
            ))
        }

        Decoding::EncodedText => match raw {
            RawExifValue::Text(t) => Ok(Value::text(trim_text(t))),
            RawExifValue::Bytes(b) => decode_encoded_text(b)
                .map(Value::text)
                .ok_or(ExifValueError::UndecodableText { tag: tag.name() }),
            _ => Err(shape_err("encoded text bytes")),
        },

        Decoding::Ucs2 => {
            let bytes: Vec<u8> = match raw {
                RawExifValue::Bytes(b) => b.clone(),
                RawExifValue::IntegerList(list) => list
                    .iter()
                    .map(|n| u8::try_from(*n).map_err(|_| shape_err("byte values")))
                    .collect::<Result<_, _>>()?,
                RawExifValue::Text(t) => return Ok(Value::text(trim_text(t))),
                _ => return Err(shape_err("UTF-16LE bytes")),
            };

            decode_utf16(&bytes, true)
                .map(Value::text)
                .ok_or(ExifValueError::UndecodableText { tag: tag.name() })
        }

        Decoding::Opaque => Ok(match raw {
            RawExifValue::Bytes(b) => Value::Scalar(Scalar::Bytes(b.clone())),
            other => decode_auto(other),
        }),
    }
}

/// Decodes a raw value by its shape alone.
pub fn decode_auto(raw: &RawExifValue) -> Value {
    match raw {
        RawExifValue::Integer(i) => Value::Scalar(Scalar::Integer(*i)),
        RawExifValue::IntegerList(list) => match list.as_slice() {
            [single] => Value::Scalar(Scalar::Integer(*single)),
            _ => Value::OrderedList(
                list.iter()
                    .map(|i| Value::Scalar(Scalar::Integer(*i)))
                    .collect(),
            ),
        },
        RawExifValue::Float(f) => Value::Scalar(Scalar::Real(*f)),

        RawExifValue::Text(t) => Value::text(trim_text(t)),
        RawExifValue::Bytes(b) => match printable_text(b) {
            Some(text) => Value::text(text),
            None => Value::Scalar(Scalar::Bytes(b.clone())),
        },

        RawExifValue::Rational(r) => Value::Scalar(Scalar::Real(r.to_f64())),
        RawExifValue::SRational(r) => Value::Scalar(Scalar::Real(r.to_f64())),
        RawExifValue::RationalList(list) => reals_value(list.iter().map(|r| r.to_f64())),
        RawExifValue::SRationalList(list) => reals_value(list.iter().map(|r| r.to_f64())),

        RawExifValue::Ifd(ifd) => {
            log::warn!(
                "A nested IFD with `{}` entries reached the value decoder. \
                It should've been resolved as a group.",
                ifd.len()
            );
            Value::Record(Vec::new())
        }
    }
}

/// One real for one number, or a list for more.
fn reals_value(reals: impl Iterator<Item = f64>) -> Value {
    let mut list: Vec<Value> = reals.map(|r| Value::Scalar(Scalar::Real(r))).collect();
    match list.len() {
        1 => list.remove(0),
        _ => Value::OrderedList(list),
    }
}

/// Folds a degrees/minutes/seconds triplet into decimal degrees.
///
/// A `reference` of `S` or `W` makes the result negative.
///
/// ```
/// use photometa::exif::gps_decimal_degrees;
///
/// let lat = gps_decimal_degrees(&[40.0, 26.0, 46.0], Some("N"));
/// assert!((lat - 40.446111).abs() < 1e-6);
///
/// let lon = gps_decimal_degrees(&[79.0, 58.0, 56.0], Some("W"));
/// assert!(lon < 0.0);
/// ```
pub fn gps_decimal_degrees(dms: &[f64], reference: Option<&str>) -> f64 {
    let magnitude: f64 = dms
        .iter()
        .zip([1.0, 60.0, 3600.0])
        .map(|(part, scale)| part / scale)
        .sum();

    match reference.map(str::trim) {
        Some("S" | "W" | "s" | "w") => -magnitude,
        _ => magnitude,
    }
}

fn format_gps_time(hours: f64, minutes: f64, seconds: f64) -> String {
    if seconds.fract() == 0.0 {
        format!("{:02}:{:02}:{:02}", hours as u32, minutes as u32, seconds as u32)
    } else {
        format!("{:02}:{:02}:{:05.2}", hours as u32, minutes as u32, seconds)
    }
}

/// Grabs a raw value's text, if it's text-shaped.
fn raw_text(raw: &RawExifValue) -> Option<String> {
    match raw {
        RawExifValue::Text(t) => Some(trim_text(t).into()),
        RawExifValue::Bytes(b) => printable_text(b),
        _ => None,
    }
}

/// Grabs a raw value as a list of floats, if it's numeric.
fn raw_reals(raw: &RawExifValue) -> Option<Vec<f64>> {
    Some(match raw {
        RawExifValue::RationalList(list) => list.iter().map(|r| r.to_f64()).collect(),
        RawExifValue::SRationalList(list) => list.iter().map(|r| r.to_f64()).collect(),
        RawExifValue::Rational(r) => vec![r.to_f64()],
        RawExifValue::SRational(r) => vec![r.to_f64()],
        RawExifValue::Float(f) => vec![*f],
        RawExifValue::Integer(i) => vec![*i as f64],
        RawExifValue::IntegerList(list) => list.iter().map(|i| *i as f64).collect(),
        _ => return None,
    })
}

/// Trims the NUL terminator (and padding) off of Exif text.
fn trim_text(text: &str) -> &str {
    text.trim_end_matches(['\0', ' '])
}

/// Decodes bytes as text when they look like text.
///
/// Trailing NULs are removed. Control characters (other than whitespace)
/// mean the bytes are binary.
fn printable_text(bytes: &[u8]) -> Option<String> {
    let end: usize = bytes.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
    let text: &str = core::str::from_utf8(&bytes[..end]).ok()?;

    if text
        .chars()
        .any(|c| c.is_control() && !matches!(c, '\t' | '\n' | '\r'))
    {
        return None;
    }

    Some(trim_text(text).into())
}

/// Decodes text with an 8-byte character code header, like `UserComment`.
fn decode_encoded_text(bytes: &[u8]) -> Option<String> {
    // no room for a header, so it's probably just text
    let Some((header, body)) = bytes.split_first_chunk::<8>() else {
        return printable_text(bytes);
    };

    let text: String = match header {
        b"ASCII\0\0\0" | b"\0\0\0\0\0\0\0\0" | b"JIS\0\0\0\0\0" => {
            let end: usize = body.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
            String::from_utf8_lossy(&body[..end]).into_owned()
        }
        b"UNICODE\0" => decode_utf16(body, guess_little_endian(body))?,
        _ => {
            log::debug!("Unknown text header `{header:?}`. Decoding the whole value as text.");
            return printable_text(bytes);
        }
    };

    Some(trim_text(&text).into())
}

/// Decodes UTF-16, trimming NUL terminators.
fn decode_utf16(bytes: &[u8], little_endian: bool) -> Option<String> {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| match little_endian {
            true => u16::from_le_bytes([pair[0], pair[1]]),
            false => u16::from_be_bytes([pair[0], pair[1]]),
        })
        .collect();

    let mut text: String = String::from_utf16(&units).ok()?;
    let trimmed_len: usize = text.trim_end_matches('\0').len();
    text.truncate(trimmed_len);
    Some(text)
}

/// Guesses the byte order of UTF-16 without a BOM.
///
/// Mostly-Latin text has a zero in every high byte. In little endian, that's
/// the odd bytes.
fn guess_little_endian(bytes: &[u8]) -> bool {
    match bytes {
        [0xFF, 0xFE, ..] => return true,
        [0xFE, 0xFF, ..] => return false,
        _ => (),
    }

    let zeros_at = |parity: usize| {
        bytes
            .iter()
            .skip(parity)
            .step_by(2)
            .filter(|b| **b == 0)
            .count()
    };

    zeros_at(1) >= zeros_at(0)
}

#[cfg(test)]
mod tests {
    use photometa_types::{
        exif::{
            FieldTag, RawExifValue,
            ifd::IfdGroup,
            primitives::{Rational, SRational},
        },
        value::{Scalar, Value},
    };

    use super::{decode_auto, decode_field};
    use crate::util::logger;

    fn tag(group: IfdGroup, id: u16) -> FieldTag {
        FieldTag::resolve(group, id)
    }

    #[test]
    fn rationals_decode_to_reals() {
        logger();

        assert_eq!(
            decode_auto(&RawExifValue::Rational(Rational::new(1, 2))),
            Value::Scalar(Scalar::Real(0.5))
        );
        assert_eq!(
            decode_auto(&RawExifValue::SRational(SRational::new(-1, 3))),
            Value::Scalar(Scalar::Real(-1.0 / 3.0))
        );

        let Value::Scalar(Scalar::Real(undefined)) =
            decode_auto(&RawExifValue::Rational(Rational::new(5, 0)))
        else {
            panic!("zero denominators should still be reals");
        };
        assert!(undefined.is_nan());
    }

    #[test]
    fn ascii_bytes_become_text() {
        logger();

        assert_eq!(
            decode_auto(&RawExifValue::Bytes(b"Canon\0".to_vec())),
            Value::text("Canon")
        );

        // binary stays binary
        assert_eq!(
            decode_auto(&RawExifValue::Bytes(vec![1, 2, 3, 0])),
            Value::Scalar(Scalar::Bytes(vec![1, 2, 3, 0]))
        );
    }

    #[test]
    fn dates_parse_or_stay_text() {
        logger();

        let original = tag(IfdGroup::Exif, 36867);
        let parsed = decode_field(&original, &RawExifValue::Text("2022:01:02 03:04:05".into()));
        assert_eq!(
            parsed.as_timestamp().map(|ts| ts.to_string()),
            Some("2022-01-02T03:04:05".into())
        );

        let garbage = decode_field(&original, &RawExifValue::Text("whenever".into()));
        assert_eq!(garbage, Value::text("whenever"));
    }

    #[test]
    fn maker_notes_are_opaque() {
        logger();

        // even when they happen to be printable
        let maker_note = tag(IfdGroup::Exif, 37500);
        assert_eq!(
            decode_field(&maker_note, &RawExifValue::Bytes(b"Nikon\0\x02".to_vec())),
            Value::Scalar(Scalar::Bytes(b"Nikon\0\x02".to_vec()))
        );
    }

    #[test]
    fn user_comment_strips_its_header() {
        logger();

        let user_comment = tag(IfdGroup::Exif, 37510);

        let mut ascii = b"ASCII\0\0\0".to_vec();
        ascii.extend_from_slice(b"hello there\0\0");
        assert_eq!(
            decode_field(&user_comment, &RawExifValue::Bytes(ascii)),
            Value::text("hello there")
        );

        let mut unicode = b"UNICODE\0".to_vec();
        unicode.extend("héllo".encode_utf16().flat_map(|u| u.to_le_bytes()));
        assert_eq!(
            decode_field(&user_comment, &RawExifValue::Bytes(unicode)),
            Value::text("héllo")
        );
    }

    #[test]
    fn xp_tags_are_utf16le() {
        logger();

        let xp_title = tag(IfdGroup::_0, 40091);
        let mut bytes: Vec<u8> = "Beach".encode_utf16().flat_map(|u| u.to_le_bytes()).collect();
        bytes.extend_from_slice(&[0, 0]);

        assert_eq!(
            decode_field(&xp_title, &RawExifValue::Bytes(bytes)),
            Value::text("Beach")
        );
    }

    #[test]
    fn gps_fields() {
        logger();

        let version = tag(IfdGroup::Gps, 0);
        assert_eq!(
            decode_field(&version, &RawExifValue::Bytes(vec![2, 3, 0, 0])),
            Value::text("2.3.0.0")
        );

        let time = tag(IfdGroup::Gps, 7);
        assert_eq!(
            decode_field(
                &time,
                &RawExifValue::RationalList(vec![
                    Rational::new(14, 1),
                    Rational::new(5, 1),
                    Rational::new(9, 1),
                ])
            ),
            Value::text("14:05:09")
        );

        let date = tag(IfdGroup::Gps, 29);
        assert_eq!(
            decode_field(&date, &RawExifValue::Text("2020:08:15".into()))
                .as_timestamp()
                .map(|ts| ts.to_string()),
            Some("2020-08-15T00:00:00".into())
        );
    }

    /// A coordinate stored as the wrong type shouldn't vanish.
    #[test]
    fn misshapen_coordinates_fall_back() {
        logger();

        let latitude = tag(IfdGroup::Gps, 2);
        assert_eq!(
            decode_field(&latitude, &RawExifValue::Text("40.5".into())),
            Value::text("40.5")
        );
    }

    #[test]
    fn unknown_tags_decode_by_shape() {
        logger();

        let unknown = tag(IfdGroup::_0, 0xC4A5);
        assert_eq!(unknown.name(), "Tag0xC4A5");
        assert_eq!(
            decode_field(&unknown, &RawExifValue::IntegerList(vec![1, 2])),
            Value::OrderedList(vec![
                Value::Scalar(Scalar::Integer(1)),
                Value::Scalar(Scalar::Integer(2)),
            ])
        );
    }
}
