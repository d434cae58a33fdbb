use crate::dicom::constants::tags;
use crate::dicom::dictionary::{self, Dictionary};
use crate::dicom::tag::Tag;
use crate::dicom::vr::Vr;

#[test]
fn test_builtin_dictionary_keywords() {
    assert_eq!(dictionary::keyword(tags::ROWS), "Rows");
    assert_eq!(dictionary::keyword(tags::PATIENT_NAME), "PatientName");
    assert_eq!(dictionary::keyword(tags::PIXEL_DATA), "PixelData");
}

#[test]
fn test_repeating_group_lookup() {
    let entry = dictionary::lookup(Tag::new(0x6002, 0x3000)).unwrap();
    assert_eq!(entry.keyword, "OverlayData");
    assert_eq!(entry.vr, Vr::OW);

    assert_eq!(dictionary::keyword(Tag::new(0x601E, 0x0010)), "OverlayRows");
}

#[test]
fn test_fallback_keywords() {
    assert_eq!(dictionary::keyword(Tag::new(0x0009, 0x1001)), "PrivateTag");
    assert_eq!(dictionary::keyword(Tag::new(0x0028, 0x0000)), "GroupLength");
    assert_eq!(dictionary::keyword(Tag::new(0x0028, 0x9999)), "Unknown");
}

#[test]
fn test_implicit_vr_inference() {
    assert_eq!(dictionary::implicit_vr(tags::ROWS), Vr::US);
    assert_eq!(dictionary::implicit_vr(tags::NUMBER_OF_FRAMES), Vr::IS);
    assert_eq!(dictionary::implicit_vr(Tag::new(0x0028, 0x0000)), Vr::UL);
    assert_eq!(dictionary::implicit_vr(Tag::new(0x0009, 0x1001)), Vr::UN);
}

#[test]
fn test_custom_dictionary() {
    let content = r#"
[tags]
"00280010" = ["Rows", "US"]
"60xx0010" = ["OverlayRows", "US"]
"#;

    let dict = Dictionary::from_str(content).unwrap();
    assert_eq!(dict.len(), 2);
    assert_eq!(dict.lookup(tags::ROWS).map(|e| e.vr), Some(Vr::US));
    assert!(dict.lookup(Tag::new(0x6000, 0x0010)).is_some());
    assert!(dict.lookup(tags::COLUMNS).is_none());
}

#[test]
fn test_invalid_dictionary_entries() {
    assert!(Dictionary::from_str("[other]\n").is_err());
    assert!(Dictionary::from_str("[tags]\n\"00280010\" = [\"Rows\", \"QQ\"]\n").is_err());
    assert!(Dictionary::from_str("[tags]\n\"00280010\" = \"Rows\"\n").is_err());
    assert!(Dictionary::from_str("[tags]\n\"0028\" = [\"Rows\", \"US\"]\n").is_err());
}
