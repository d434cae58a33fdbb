//! DICOM format constants
//!
//! Named tags, transfer syntax UIDs and header markers, replacing magic
//! numbers throughout the reader and decoders.

/// Part 10 file header constants
pub mod header {
    /// Length of the preamble preceding the magic bytes
    pub const PREAMBLE_LENGTH: usize = 128;

    /// Magic bytes following the preamble
    pub const MAGIC: &[u8; 4] = b"DICM";

    /// Group number of the file meta information
    pub const META_GROUP: u16 = 0x0002;

    /// Length value marking an element or item of undefined length
    pub const UNDEFINED_LENGTH: u32 = 0xFFFF_FFFF;
}

/// Transfer syntax UIDs
pub mod transfer_syntax {
    pub const IMPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2";
    pub const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
    pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1.99";
    pub const EXPLICIT_VR_BIG_ENDIAN: &str = "1.2.840.10008.1.2.2";

    /// Whether pixel data under this syntax is stored uncompressed
    pub fn is_native(uid: &str) -> bool {
        matches!(uid, IMPLICIT_VR_LITTLE_ENDIAN | EXPLICIT_VR_LITTLE_ENDIAN | EXPLICIT_VR_BIG_ENDIAN)
    }
}

/// Frequently used tags
pub mod tags {
    use crate::dicom::tag::Tag;

    pub const TRANSFER_SYNTAX_UID: Tag = Tag::new(0x0002, 0x0010);
    pub const STUDY_DATE: Tag = Tag::new(0x0008, 0x0020);
    pub const PATIENT_NAME: Tag = Tag::new(0x0010, 0x0010);
    pub const SAMPLES_PER_PIXEL: Tag = Tag::new(0x0028, 0x0002);
    pub const NUMBER_OF_FRAMES: Tag = Tag::new(0x0028, 0x0008);
    pub const ROWS: Tag = Tag::new(0x0028, 0x0010);
    pub const COLUMNS: Tag = Tag::new(0x0028, 0x0011);
    pub const BITS_ALLOCATED: Tag = Tag::new(0x0028, 0x0100);
    pub const BITS_STORED: Tag = Tag::new(0x0028, 0x0101);
    pub const PIXEL_DATA: Tag = Tag::new(0x7FE0, 0x0010);

    pub const ITEM: Tag = Tag::new(0xFFFE, 0xE000);
    pub const ITEM_DELIMITATION: Tag = Tag::new(0xFFFE, 0xE00D);
    pub const SEQUENCE_DELIMITATION: Tag = Tag::new(0xFFFE, 0xE0DD);
}
