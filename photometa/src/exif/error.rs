/// Decoding a field's value may fail when a writer stored the wrong type,
/// or stored text that doesn't say what the tag promises.
///
/// These never reach the user as errors. The resolver logs them, then keeps
/// the raw value using its plain shape instead.
#[derive(Clone, Debug, PartialEq, PartialOrd, Hash)]
pub enum ExifValueError {
    /// The raw value's shape didn't match what the tag stores.
    UnexpectedShape {
        tag: String,
        expected: &'static str,
    },

    /// A date/time tag held text that isn't a date.
    UnparsableDate { tag: String, text: String },

    /// A text tag held bytes that couldn't be decoded as text.
    UndecodableText { tag: String },
}

impl core::fmt::Display for ExifValueError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnexpectedShape { tag, expected } => write!(
                f,
                "Field `{tag}` had an unexpected value shape. expected: {expected}"
            ),
            Self::UnparsableDate { tag, text } => {
                write!(f, "Field `{tag}` should hold a date, but got: `{text}`")
            }
            Self::UndecodableText { tag } => {
                write!(f, "Field `{tag}` should hold text, but its bytes weren't decodable.")
            }
        }
    }
}

impl core::error::Error for ExifValueError {}
