//! Types for `photometa`.
//!
//! This crate holds data only: the normalized value model, the raw Exif
//! input types alongside their tag tables, and the XMP namespaces plus the
//! typing table used when parsing XMP primitives.

pub mod exif;
pub mod value;
pub mod xmp;
