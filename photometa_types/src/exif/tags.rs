//! Definitions for tags in an IFD group.
//!
//! # `tags`
//!
//! Contains all the tags stored in an [`IfdGroup`].
//!
//! Tags, which are within IFDs, have a key and >=1 value(s).
//!
//! ## What's this for?
//!
//! This module is the name table for the Exif resolver. Each tag ID maps to
//! its standard field name (like `DateTimeOriginal`), a short description,
//! and a [`Decoding`] that says how its raw value should be interpreted.
//!
//! Tag IDs are only unique within their group. For example, `1` is
//! `GPSLatitudeRef` in the GPS IFD, but `InteroperabilityIndex` in the
//! interop IFD.
//!
//! ## For contributors
//!
//! ### Adding new tags
//!
//! Let's say we want to add a new tag to `IfdGroup::Exif`. Let's call it
//! `YourNewKey`; please assume it has a tag ID of `1000` and stores a date.
//!
//! Under the `make_key_list_for_group` macro for `IfdGroup::Exif`, add a
//! new listing:
//!
//! ```no_compile
//! make_key_list_for_group!(enum ExifIfdTag => IfdGroup::Exif,
//!     // ...snip!
//!
//!     YourNewKey = 1000 => {
//!         description: "Your new key",
//!         decode: Dec::DateTime,
//!     },
//! );
//! ```
//!
//! The variant's identifier doubles as the field name, so spell it the way
//! the Exif standard does.

use crate::exif::ifd::IfdGroup;

/// How a tag's raw value should be decoded.
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum Decoding {
    /// Decode by the raw value's shape: numbers stay numbers, rationals
    /// become floats, and printable byte strings become text.
    Auto,

    /// A date and time in the fixed Exif format, `YYYY:MM:DD HH:MM:SS`.
    DateTime,

    /// A date alone, `YYYY:MM:DD`.
    Date,

    /// A degrees/minutes/seconds triplet. The hemisphere is applied later,
    /// using the matching `*Ref` tag.
    GpsCoordinate,

    /// An hours/minutes/seconds triplet in UTC.
    GpsTime,

    /// Version bytes, like `[2, 3, 0, 0]`.
    Version,

    /// Text with an 8-byte character code header, like `ASCII\0\0\0`.
    EncodedText,

    /// Windows `XP*` text, stored as UTF-16LE bytes.
    Ucs2,

    /// Vendor or binary data that shouldn't be interpreted.
    Opaque,

    /// A pointer to a sub-IFD.
    SubIfd,
}

/// Creates a "key list" for an IFD group.
///
/// These may include duplicate tag IDs from other groups.
macro_rules! make_key_list_for_group {
    (enum $enum_name:ident => $ifd_group:expr,
        $( $key_ident:ident = $key_tag:literal => {
            description: $description:expr,
            decode: $decode:expr,
        },
    )+) => {
        #[doc = "A list of all keys present in the matching `IfdGroup` variant."]
        #[repr(u16)]
        #[non_exhaustive]
        #[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
        pub enum $enum_name {
            $(
              $key_ident = $key_tag,
            )+
        }

        impl $enum_name {
            /// Returns the `IfdGroup` that this enum represents.
            pub const fn ifd_group() -> IfdGroup {
                $ifd_group
            }

            /// Returns this key's tag ID.
            pub const fn tag_id(&self) -> u16 {
                *self as u16
            }

            /// Grabs a key's field name as spelled in the standard.
            pub const fn tag_name(&self) -> &'static str {
                match self {
                    $( Self::$key_ident => stringify!($key_ident), )+
                }
            }

            /// A short, human-readable description of the key.
            pub const fn description(&self) -> &'static str {
                match self {
                    $( Self::$key_ident => $description, )+
                }
            }

            /// Says how this key's raw value should be decoded.
            pub const fn decoding(&self) -> Decoding {
                match self {
                    $( Self::$key_ident => $decode, )+
                }
            }

            /// Every key in this group, in declaration order.
            pub const ALL: &'static [$enum_name] = &[ $( Self::$key_ident, )+ ];
        }

        impl core::convert::TryFrom<u16> for $enum_name {
            type Error = ();

            fn try_from(value: u16) -> Result<Self, Self::Error> {
                match value {
                    $( $key_tag => Ok($enum_name::$key_ident), )+
                    _ => Err(()),
                }
            }
        }
    }
}

use Decoding as Dec;

/// A set of all known tags and their IFD groups.
#[derive(Copy, Clone, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum KnownTag {
    Ifd0Tag(Ifd0Tag),
    ExifIfdTag(ExifIfdTag),
    GpsIfdTag(GpsIfdTag),
    InteropIfdTag(InteropIfdTag),
}

impl KnownTag {
    /// Returns the `IfdGroup` that this tag belongs to.
    ///
    /// ```
    /// use photometa_types::exif::{tags::{KnownTag, Ifd0Tag}, ifd::IfdGroup};
    ///
    /// let image_width: KnownTag = KnownTag::Ifd0Tag(Ifd0Tag::ImageWidth);
    /// assert_eq!(image_width.ifd_group(), IfdGroup::_0);
    /// ```
    pub const fn ifd_group(self) -> IfdGroup {
        match self {
            KnownTag::Ifd0Tag(_) => Ifd0Tag::ifd_group(),
            KnownTag::ExifIfdTag(_) => ExifIfdTag::ifd_group(),
            KnownTag::GpsIfdTag(_) => GpsIfdTag::ifd_group(),
            KnownTag::InteropIfdTag(_) => InteropIfdTag::ifd_group(),
        }
    }

    /// Returns this tag's tag ID.
    ///
    /// ```
    /// use photometa_types::exif::tags::{KnownTag, Ifd0Tag};
    ///
    /// let image_width: KnownTag = KnownTag::Ifd0Tag(Ifd0Tag::ImageWidth);
    /// assert_eq!(image_width.tag_id(), 256_u16);
    /// ```
    pub const fn tag_id(&self) -> u16 {
        match self {
            KnownTag::Ifd0Tag(k) => *k as u16,
            KnownTag::ExifIfdTag(k) => *k as u16,
            KnownTag::GpsIfdTag(k) => *k as u16,
            KnownTag::InteropIfdTag(k) => *k as u16,
        }
    }

    /// Grabs a tag's field name.
    ///
    /// ```
    /// use photometa_types::exif::tags::{KnownTag, ExifIfdTag};
    ///
    /// let original = KnownTag::ExifIfdTag(ExifIfdTag::DateTimeOriginal);
    /// assert_eq!(original.tag_name(), "DateTimeOriginal");
    /// ```
    pub const fn tag_name(&self) -> &'static str {
        match self {
            KnownTag::Ifd0Tag(k) => k.tag_name(),
            KnownTag::ExifIfdTag(k) => k.tag_name(),
            KnownTag::GpsIfdTag(k) => k.tag_name(),
            KnownTag::InteropIfdTag(k) => k.tag_name(),
        }
    }

    /// A short, human-readable description of the tag.
    pub const fn description(&self) -> &'static str {
        match self {
            KnownTag::Ifd0Tag(k) => k.description(),
            KnownTag::ExifIfdTag(k) => k.description(),
            KnownTag::GpsIfdTag(k) => k.description(),
            KnownTag::InteropIfdTag(k) => k.description(),
        }
    }

    /// Says how this tag's raw value should be decoded.
    pub const fn decoding(&self) -> Decoding {
        match self {
            KnownTag::Ifd0Tag(k) => k.decoding(),
            KnownTag::ExifIfdTag(k) => k.decoding(),
            KnownTag::GpsIfdTag(k) => k.decoding(),
            KnownTag::InteropIfdTag(k) => k.decoding(),
        }
    }
}

impl TryFrom<(IfdGroup, u16)> for KnownTag {
    type Error = ();

    fn try_from(value: (IfdGroup, u16)) -> Result<Self, Self::Error> {
        let (ifd_group, tag_id): (IfdGroup, u16) = value;

        match ifd_group {
            IfdGroup::_0 => Ifd0Tag::try_from(tag_id).map(KnownTag::Ifd0Tag),
            IfdGroup::Exif => ExifIfdTag::try_from(tag_id).map(KnownTag::ExifIfdTag),
            IfdGroup::Gps => GpsIfdTag::try_from(tag_id).map(KnownTag::GpsIfdTag),
            IfdGroup::Interop => InteropIfdTag::try_from(tag_id).map(KnownTag::InteropIfdTag),
        }
    }
}

/*
 *
 *
 *
 *  TIFF Rev. 6.0 Attribute List (IFD 0)
 *
 *
 *
 */
make_key_list_for_group!(enum Ifd0Tag => IfdGroup::_0,
    //
    // image data structure
    ImageWidth = 256 => {
        description: "Image width",
        decode: Dec::Auto,
    },
    ImageLength = 257 => {
        description: "Image height",
        decode: Dec::Auto,
    },
    BitsPerSample = 258 => {
        description: "Number of bits per component",
        decode: Dec::Auto,
    },
    Compression = 259 => {
        description: "Compression scheme",
        decode: Dec::Auto,
    },
    PhotometricInterpretation = 262 => {
        description: "Pixel composition",
        decode: Dec::Auto,
    },
    Orientation = 274 => {
        description: "Orientation of image",
        decode: Dec::Auto,
    },
    SamplesPerPixel = 277 => {
        description: "Number of components",
        decode: Dec::Auto,
    },
    XResolution = 282 => {
        description: "Image resolution in width direction",
        decode: Dec::Auto,
    },
    YResolution = 283 => {
        description: "Image resolution in height direction",
        decode: Dec::Auto,
    },
    PlanarConfiguration = 284 => {
        description: "Image data arrangement",
        decode: Dec::Auto,
    },
    ResolutionUnit = 296 => {
        description: "Unit of X and Y resolution",
        decode: Dec::Auto,
    },
    YCbCrSubSampling = 530 => {
        description: "Subsampling ratio of Y to C",
        decode: Dec::Auto,
    },
    YCbCrPositioning = 531 => {
        description: "Y and C positioning",
        decode: Dec::Auto,
    },

    //
    // recording offset
    StripOffsets = 273 => {
        description: "Offset to strip",
        decode: Dec::Auto,
    },
    RowsPerStrip = 278 => {
        description: "Number of rows per strip",
        decode: Dec::Auto,
    },
    StripByteCounts = 279 => {
        description: "Bytes per compressed strip",
        decode: Dec::Auto,
    },
    JPEGInterchangeFormat = 513 => {
        description: "Offset to JPEG SOI",
        decode: Dec::Auto,
    },
    JPEGInterchangeFormatLength = 514 => {
        description: "Bytes of JPEG data",
        decode: Dec::Auto,
    },

    //
    // image data characteristics
    TransferFunction = 301 => {
        description: "Transfer function",
        decode: Dec::Auto,
    },
    WhitePoint = 318 => {
        description: "White point chromaticity",
        decode: Dec::Auto,
    },
    PrimaryChromaticities = 319 => {
        description: "Chromaticities of primaries",
        decode: Dec::Auto,
    },
    YCbCrCoefficients = 529 => {
        description: "Color space transformation matrix coefficients",
        decode: Dec::Auto,
    },
    ReferenceBlackWhite = 532 => {
        description: "Pair of black and white reference values",
        decode: Dec::Auto,
    },

    //
    // other tags
    ImageDescription = 270 => {
        description: "Description of Image",
        decode: Dec::Auto,
    },
    Make = 271 => {
        description: "Image input equipment manufacturer",
        decode: Dec::Auto,
    },
    Model = 272 => {
        description: "Image input equipment model",
        decode: Dec::Auto,
    },
    Software = 305 => {
        description: "Software used",
        decode: Dec::Auto,
    },
    DateTime = 306 => {
        description: "File change date and time",
        decode: Dec::DateTime,
    },
    Artist = 315 => {
        description: "Person who created the image",
        decode: Dec::Auto,
    },
    HostComputer = 316 => {
        description: "Computer used to create the image",
        decode: Dec::Auto,
    },
    Rating = 18246 => {
        description: "Star rating",
        decode: Dec::Auto,
    },
    RatingPercent = 18249 => {
        description: "Rating as a percentage",
        decode: Dec::Auto,
    },
    Copyright = 33432 => {
        description: "Copyright holder",
        decode: Dec::Auto,
    },

    //
    // windows explorer properties (UTF-16LE)
    XPTitle = 40091 => {
        description: "Windows title",
        decode: Dec::Ucs2,
    },
    XPComment = 40092 => {
        description: "Windows comment",
        decode: Dec::Ucs2,
    },
    XPAuthor = 40093 => {
        description: "Windows author",
        decode: Dec::Ucs2,
    },
    XPKeywords = 40094 => {
        description: "Windows keywords",
        decode: Dec::Ucs2,
    },
    XPSubject = 40095 => {
        description: "Windows subject",
        decode: Dec::Ucs2,
    },

    // these are IFD pointers.
    //
    // decoders replace the offset with the nested dictionary, so these are
    // where the Exif and GPS IFDs show up.
    ExifOffset = 34665 => {
        description: "Exif IFD pointer",
        decode: Dec::SubIfd,
    },
    GPSInfo = 34853 => {
        description: "GPS info IFD pointer",
        decode: Dec::SubIfd,
    },
);

/*
 *
 *
 *
 *  Exif IFD Attribute List
 *
 *
 *
 */
make_key_list_for_group!(enum ExifIfdTag => IfdGroup::Exif,
    //
    // tags relating to version
    ExifVersion = 36864 => {
        description: "Exif version",
        decode: Dec::Auto,
    },
    FlashpixVersion = 40960 => {
        description: "Supported Flashpix version",
        decode: Dec::Auto,
    },

    //
    // image data characteristics
    ColorSpace = 40961 => {
        description: "Color space information",
        decode: Dec::Auto,
    },
    Gamma = 42240 => {
        description: "Gamma",
        decode: Dec::Auto,
    },

    //
    // image configuration
    ComponentsConfiguration = 37121 => {
        description: "Meaning of each component",
        decode: Dec::Opaque,
    },
    CompressedBitsPerPixel = 37122 => {
        description: "Image compression mode",
        decode: Dec::Auto,
    },
    PixelXDimension = 40962 => {
        description: "Valid image width",
        decode: Dec::Auto,
    },
    PixelYDimension = 40963 => {
        description: "Valid image height",
        decode: Dec::Auto,
    },

    //
    // user information
    MakerNote = 37500 => {
        description: "Manufacturer notes",
        decode: Dec::Opaque,
    },
    UserComment = 37510 => {
        description: "User comments",
        decode: Dec::EncodedText,
    },

    //
    // related file information
    RelatedSoundFile = 40964 => {
        description: "Related audio file",
        decode: Dec::Auto,
    },

    //
    // date and time
    DateTimeOriginal = 36867 => {
        description: "Date and time of original data generation",
        decode: Dec::DateTime,
    },
    DateTimeDigitized = 36868 => {
        description: "Date and time of digital data generation",
        decode: Dec::DateTime,
    },
    OffsetTime = 36880 => {
        description: "Offset data of DateTime",
        decode: Dec::Auto,
    },
    OffsetTimeOriginal = 36881 => {
        description: "Offset data of DateTimeOriginal",
        decode: Dec::Auto,
    },
    OffsetTimeDigitized = 36882 => {
        description: "Offset data of DateTimeDigitized",
        decode: Dec::Auto,
    },
    SubSecTime = 37520 => {
        description: "DateTime subseconds",
        decode: Dec::Auto,
    },
    SubSecTimeOriginal = 37521 => {
        description: "DateTimeOriginal subseconds",
        decode: Dec::Auto,
    },
    SubSecTimeDigitized = 37522 => {
        description: "DateTimeDigitized subseconds",
        decode: Dec::Auto,
    },

    //
    // shooting conditions
    Temperature = 37888 => {
        description: "Temperature",
        decode: Dec::Auto,
    },
    Humidity = 37889 => {
        description: "Humidity",
        decode: Dec::Auto,
    },
    Pressure = 37890 => {
        description: "Pressure",
        decode: Dec::Auto,
    },
    WaterDepth = 37891 => {
        description: "Water depth",
        decode: Dec::Auto,
    },
    Acceleration = 37892 => {
        description: "Acceleration",
        decode: Dec::Auto,
    },
    CameraElevationAngle = 37893 => {
        description: "Camera elevation angle",
        decode: Dec::Auto,
    },

    //
    // other tags
    ImageUniqueID = 42016 => {
        description: "Unique image ID",
        decode: Dec::Auto,
    },
    CameraOwnerName = 42032 => {
        description: "Camera owner name",
        decode: Dec::Auto,
    },
    BodySerialNumber = 42033 => {
        description: "Camera body serial number",
        decode: Dec::Auto,
    },
    LensSpecification = 42034 => {
        description: "Lens specification",
        decode: Dec::Auto,
    },
    LensMake = 42035 => {
        description: "Lens make",
        decode: Dec::Auto,
    },
    LensModel = 42036 => {
        description: "Lens model",
        decode: Dec::Auto,
    },
    LensSerialNumber = 42037 => {
        description: "Lens serial number",
        decode: Dec::Auto,
    },

    //
    // picture-taking conditions
    ExposureTime = 33434 => {
        description: "Exposure time",
        decode: Dec::Auto,
    },
    FNumber = 33437 => {
        description: "F number",
        decode: Dec::Auto,
    },
    ExposureProgram = 34850 => {
        description: "Exposure program",
        decode: Dec::Auto,
    },
    SpectralSensitivity = 34852 => {
        description: "Spectral sensitivity",
        decode: Dec::Auto,
    },
    PhotographicSensitivity = 34855 => {
        description: "Photographic sensitivity",
        decode: Dec::Auto,
    },
    OECF = 34856 => {
        description: "Optoelectric conversion factor",
        decode: Dec::Opaque,
    },
    SensitivityType = 34864 => {
        description: "Sensitivity type",
        decode: Dec::Auto,
    },
    StandardOutputSensitivity = 34865 => {
        description: "Standard output sensitivity",
        decode: Dec::Auto,
    },
    RecommendedExposureIndex = 34866 => {
        description: "Recommended exposure index",
        decode: Dec::Auto,
    },
    ISOSpeed = 34867 => {
        description: "ISO speed",
        decode: Dec::Auto,
    },
    ShutterSpeedValue = 37377 => {
        description: "Shutter speed",
        decode: Dec::Auto,
    },
    ApertureValue = 37378 => {
        description: "Aperture",
        decode: Dec::Auto,
    },
    BrightnessValue = 37379 => {
        description: "Brightness",
        decode: Dec::Auto,
    },
    ExposureBiasValue = 37380 => {
        description: "Exposure bias",
        decode: Dec::Auto,
    },
    MaxApertureValue = 37381 => {
        description: "Maximum lens aperture",
        decode: Dec::Auto,
    },
    SubjectDistance = 37382 => {
        description: "Subject distance",
        decode: Dec::Auto,
    },
    MeteringMode = 37383 => {
        description: "Metering mode",
        decode: Dec::Auto,
    },
    LightSource = 37384 => {
        description: "Light source",
        decode: Dec::Auto,
    },
    Flash = 37385 => {
        description: "Flash",
        decode: Dec::Auto,
    },
    FocalLength = 37386 => {
        description: "Lens focal length",
        decode: Dec::Auto,
    },
    SubjectArea = 37396 => {
        description: "Subject area",
        decode: Dec::Auto,
    },
    FlashEnergy = 41483 => {
        description: "Flash energy",
        decode: Dec::Auto,
    },
    SpatialFrequencyResponse = 41484 => {
        description: "Spatial frequency response",
        decode: Dec::Opaque,
    },
    FocalPlaneXResolution = 41486 => {
        description: "Focal plane X resolution",
        decode: Dec::Auto,
    },
    FocalPlaneYResolution = 41487 => {
        description: "Focal plane Y resolution",
        decode: Dec::Auto,
    },
    FocalPlaneResolutionUnit = 41488 => {
        description: "Focal plane resolution unit",
        decode: Dec::Auto,
    },
    SubjectLocation = 41492 => {
        description: "Subject location",
        decode: Dec::Auto,
    },
    ExposureIndex = 41493 => {
        description: "Exposure index",
        decode: Dec::Auto,
    },
    SensingMethod = 41495 => {
        description: "Sensing method",
        decode: Dec::Auto,
    },
    FileSource = 41728 => {
        description: "File source",
        decode: Dec::Auto,
    },
    SceneType = 41729 => {
        description: "Scene type",
        decode: Dec::Auto,
    },
    CFAPattern = 41730 => {
        description: "CFA pattern",
        decode: Dec::Opaque,
    },
    CustomRendered = 41985 => {
        description: "Custom image processing",
        decode: Dec::Auto,
    },
    ExposureMode = 41986 => {
        description: "Exposure mode",
        decode: Dec::Auto,
    },
    WhiteBalance = 41987 => {
        description: "White balance",
        decode: Dec::Auto,
    },
    DigitalZoomRatio = 41988 => {
        description: "Digital zoom ratio",
        decode: Dec::Auto,
    },
    FocalLengthIn35mmFilm = 41989 => {
        description: "Focal length in 35 mm film",
        decode: Dec::Auto,
    },
    SceneCaptureType = 41990 => {
        description: "Scene capture type",
        decode: Dec::Auto,
    },
    GainControl = 41991 => {
        description: "Gain control",
        decode: Dec::Auto,
    },
    Contrast = 41992 => {
        description: "Contrast",
        decode: Dec::Auto,
    },
    Saturation = 41993 => {
        description: "Saturation",
        decode: Dec::Auto,
    },
    Sharpness = 41994 => {
        description: "Sharpness",
        decode: Dec::Auto,
    },
    DeviceSettingDescription = 41995 => {
        description: "Device settings description",
        decode: Dec::Opaque,
    },
    SubjectDistanceRange = 41996 => {
        description: "Subject distance range",
        decode: Dec::Auto,
    },
    CompositeImage = 42080 => {
        description: "Composite image",
        decode: Dec::Auto,
    },

    InteropOffset = 40965 => {
        description: "Interoperability IFD pointer",
        decode: Dec::SubIfd,
    },
);

/*
 *
 *
 *
 *  GPS Attribute List
 *
 *
 *
 */
make_key_list_for_group!(enum GpsIfdTag => IfdGroup::Gps,
    GPSVersionID = 0 => {
        description: "GPS tag version",
        decode: Dec::Version,
    },
    GPSLatitudeRef = 1 => {
        description: "North or South Latitude",
        decode: Dec::Auto,
    },
    GPSLatitude = 2 => {
        description: "Latitude",
        decode: Dec::GpsCoordinate,
    },
    GPSLongitudeRef = 3 => {
        description: "East or West Longitude",
        decode: Dec::Auto,
    },
    GPSLongitude = 4 => {
        description: "Longitude",
        decode: Dec::GpsCoordinate,
    },
    GPSAltitudeRef = 5 => {
        description: "Altitude reference",
        decode: Dec::Auto,
    },
    GPSAltitude = 6 => {
        description: "Altitude",
        decode: Dec::Auto,
    },
    GPSTimeStamp = 7 => {
        description: "GPS time (atomic clock)",
        decode: Dec::GpsTime,
    },
    GPSSatellites = 8 => {
        description: "GPS satellites used for measurement",
        decode: Dec::Auto,
    },
    GPSStatus = 9 => {
        description: "GPS receiver status",
        decode: Dec::Auto,
    },
    GPSMeasureMode = 10 => {
        description: "GPS measurement mode",
        decode: Dec::Auto,
    },
    GPSDOP = 11 => {
        description: "Measurement precision",
        decode: Dec::Auto,
    },
    GPSSpeedRef = 12 => {
        description: "Speed unit",
        decode: Dec::Auto,
    },
    GPSSpeed = 13 => {
        description: "Speed of GPS receiver",
        decode: Dec::Auto,
    },
    GPSTrackRef = 14 => {
        description: "Reference for direction of movement",
        decode: Dec::Auto,
    },
    GPSTrack = 15 => {
        description: "Direction of movement",
        decode: Dec::Auto,
    },
    GPSImgDirectionRef = 16 => {
        description: "Reference for direction of image",
        decode: Dec::Auto,
    },
    GPSImgDirection = 17 => {
        description: "Direction of image",
        decode: Dec::Auto,
    },
    GPSMapDatum = 18 => {
        description: "Geodetic survey data used",
        decode: Dec::Auto,
    },
    GPSDestLatitudeRef = 19 => {
        description: "Reference for latitude of destination",
        decode: Dec::Auto,
    },
    GPSDestLatitude = 20 => {
        description: "Latitude of destination",
        decode: Dec::GpsCoordinate,
    },
    GPSDestLongitudeRef = 21 => {
        description: "Reference for longitude of destination",
        decode: Dec::Auto,
    },
    GPSDestLongitude = 22 => {
        description: "Longitude of destination",
        decode: Dec::GpsCoordinate,
    },
    GPSDestBearingRef = 23 => {
        description: "Reference for bearing of destination",
        decode: Dec::Auto,
    },
    GPSDestBearing = 24 => {
        description: "Bearing of destination",
        decode: Dec::Auto,
    },
    GPSDestDistanceRef = 25 => {
        description: "Reference for distance to destination",
        decode: Dec::Auto,
    },
    GPSDestDistance = 26 => {
        description: "Distance to destination",
        decode: Dec::Auto,
    },
    GPSProcessingMethod = 27 => {
        description: "Name of GPS processing method",
        decode: Dec::EncodedText,
    },
    GPSAreaInformation = 28 => {
        description: "Name of GPS area",
        decode: Dec::EncodedText,
    },
    GPSDateStamp = 29 => {
        description: "GPS date",
        decode: Dec::Date,
    },
    GPSDifferential = 30 => {
        description: "GPS differential correction",
        decode: Dec::Auto,
    },
    GPSHPositioningError = 31 => {
        description: "Horizontal positioning error",
        decode: Dec::Auto,
    },
);

/*
 *
 *
 *
 *  Interoperability Attribute List
 *
 *
 *
 */
make_key_list_for_group!(enum InteropIfdTag => IfdGroup::Interop,
    InteroperabilityIndex = 1 => {
        description: "Interoperability identification",
        decode: Dec::Auto,
    },
    InteroperabilityVersion = 2 => {
        description: "Interoperability version",
        decode: Dec::Auto,
    },
    RelatedImageFileFormat = 4096 => {
        description: "Related image file format",
        decode: Dec::Auto,
    },
    RelatedImageWidth = 4097 => {
        description: "Related image width",
        decode: Dec::Auto,
    },
    RelatedImageLength = 4098 => {
        description: "Related image height",
        decode: Dec::Auto,
    },
);
