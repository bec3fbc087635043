//! Contains stuff related to IFDs.
//!
//! For more info, see the [`IfdGroup`] enumeration.

/// An IFD is a set of keys found within a media file's Exif metadata.
///
/// IFDs aren't self-describing in their type. Instead, IFD 0 will
/// (optionally) contain keys indicating the locations of sub-IFDs. By the
/// time a decoder hands us a dictionary, those pointers have usually been
/// replaced by the nested dictionaries themselves, stored under the same tag
/// ID.
///
/// That means that IFD 0 is always the root of the dictionary, as other
/// groups have no way to self-describe.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum IfdGroup {
    /// Refers to "IFD 0".
    ///
    /// This one stems from TIFF. Exif matches the TIFF v6.0 (1992)
    /// specification with the provided keys in this group.
    #[doc(alias = "IFD0")]
    #[doc(alias = "TIFF")]
    _0,

    /// The "Exif" IFD provides camera-based metadata.
    ///
    /// For example, it's home to important values like exposure information
    /// and the original capture date.
    #[doc(alias = "ExifIFD")]
    Exif,

    /// The GPS IFD contains location metadata.
    #[doc(alias = "GPSIFD")]
    Gps,

    /// The interoperability IFD specifies info about what software was used to
    /// write the Exif metadata.
    #[doc(alias = "InteropIFD")]
    Interop,
}

impl IfdGroup {
    /// Finds the group a nested dictionary belongs to, given the tag it was
    /// stored under and the group holding that tag.
    ///
    /// Returns `None` for tags that don't point to a sub-IFD.
    ///
    /// ```
    /// use photometa_types::exif::ifd::IfdGroup;
    ///
    /// assert_eq!(IfdGroup::_0.sub_ifd(34853), Some(IfdGroup::Gps));
    /// assert_eq!(IfdGroup::Gps.sub_ifd(34853), None);
    /// ```
    pub const fn sub_ifd(&self, tag_id: u16) -> Option<IfdGroup> {
        match (self, tag_id) {
            (IfdGroup::_0, EXIF_IFD_POINTER) => Some(IfdGroup::Exif),
            (IfdGroup::_0, GPS_IFD_POINTER) => Some(IfdGroup::Gps),

            // some decoders hoist the Exif IFD's pointers into IFD 0, so
            // accept the interop pointer in both places
            (IfdGroup::_0 | IfdGroup::Exif, INTEROP_IFD_POINTER) => Some(IfdGroup::Interop),
            _ => None,
        }
    }
}

/// The tag ID that IFD 0 stores the Exif sub-IFD under.
pub const EXIF_IFD_POINTER: u16 = 34665;

/// The tag ID that IFD 0 stores the GPS IFD under.
pub const GPS_IFD_POINTER: u16 = 34853;

/// The tag ID that the Exif IFD stores the interoperability IFD under.
pub const INTEROP_IFD_POINTER: u16 = 40965;
