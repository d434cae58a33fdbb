use crate::dicom::constants::tags;
use crate::dicom::dataset::Dataset;
use crate::dicom::element::DataElement;
use crate::dicom::tag::Tag;
use crate::dicom::tests::test_utils::{explicit_dataset, ElementWriter};
use crate::dicom::vr::Vr;
use crate::io::byte_order::ByteOrder;

const WINDOW_CENTER: Tag = Tag::new(0x0028, 0x1050);
const IMAGE_COMMENTS: Tag = Tag::new(0x0020, 0x4000);

#[test]
fn test_numeric_accessors() {
    let dataset = explicit_dataset(
        ElementWriter::new()
            .explicit(Tag::new(0x0028, 0x0030), Vr::US, &[0x01, 0x06, 0x00, 0x02])
            .explicit(Tag::new(0x0018, 0x1310), Vr::SS, &[0xFE, 0xFF])
            .into_bytes(),
    );

    assert_eq!(dataset.uint16(Tag::new(0x0028, 0x0030), 0), Some(1537));
    assert_eq!(dataset.uint16(Tag::new(0x0028, 0x0030), 1), Some(512));
    assert_eq!(dataset.uint16(Tag::new(0x0028, 0x0030), 2), None);
    assert_eq!(dataset.int16(Tag::new(0x0018, 0x1310), 0), Some(-2));
    assert_eq!(dataset.uint32(Tag::new(0x0018, 0x1310), 0), None);
    assert_eq!(dataset.uint16(tags::ROWS, 0), None);
}

#[test]
fn test_string_accessors() {
    let dataset = explicit_dataset(
        ElementWriter::new()
            .string(tags::PATIENT_NAME, Vr::PN, " Doe^John ")
            .string(WINDOW_CENTER, Vr::DS, "40\\400 ")
            .string(IMAGE_COMMENTS, Vr::LT, "  indented  ")
            .into_bytes(),
    );

    assert_eq!(dataset.string(tags::PATIENT_NAME, None).as_deref(), Some("Doe^John"));
    assert_eq!(dataset.string(WINDOW_CENTER, Some(0)).as_deref(), Some("40"));
    assert_eq!(dataset.string(WINDOW_CENTER, Some(1)).as_deref(), Some("400"));
    assert_eq!(dataset.string(WINDOW_CENTER, Some(2)), None);
    assert_eq!(dataset.num_string_values(WINDOW_CENTER), Some(2));
    assert_eq!(dataset.text(IMAGE_COMMENTS, None).as_deref(), Some("  indented"));
}

#[test]
fn test_string_stops_at_nul_and_reads_latin1() {
    let dataset = explicit_dataset(
        ElementWriter::new()
            .explicit(tags::PATIENT_NAME, Vr::PN, &[b'M', 0xFC, b'l', b'l', b'e', b'r', 0x00, b'X'])
            .into_bytes(),
    );

    assert_eq!(dataset.string(tags::PATIENT_NAME, None).as_deref(), Some("Müller"));
}

#[test]
fn test_empty_value_has_no_string() {
    let dataset = explicit_dataset(ElementWriter::new().string(tags::STUDY_DATE, Vr::DA, "").into_bytes());

    assert!(dataset.has_element(tags::STUDY_DATE));
    assert_eq!(dataset.string(tags::STUDY_DATE, None), None);
    assert_eq!(dataset.value_bytes(tags::STUDY_DATE), Some(&[][..]));
}

#[test]
fn test_out_of_bounds_element_yields_nothing() {
    let element = DataElement::new(tags::ROWS, Vr::US, 6, 2);
    let dataset = Dataset::new(vec![0u8; 4], vec![element], ByteOrder::LittleEndian, "1.2.840.10008.1.2.1");

    assert!(dataset.has_element(tags::ROWS));
    assert_eq!(dataset.value_bytes(tags::ROWS), None);
    assert_eq!(dataset.uint16(tags::ROWS, 0), None);
}

#[test]
fn test_big_endian_values() {
    let element = DataElement::new(tags::ROWS, Vr::US, 0, 2);
    let dataset = Dataset::new(vec![0x02, 0x00], vec![element], ByteOrder::BigEndian, "1.2.840.10008.1.2.2");

    assert_eq!(dataset.uint16(tags::ROWS, 0), Some(512));
}

#[test]
fn test_elements_are_ordered_by_tag() {
    let dataset = explicit_dataset(
        ElementWriter::new()
            .us(tags::COLUMNS, 4)
            .string(tags::PATIENT_NAME, Vr::PN, "A^B ")
            .us(tags::ROWS, 2)
            .into_bytes(),
    );

    let order: Vec<Tag> = dataset.elements().map(|e| e.tag).collect();
    assert_eq!(order, vec![tags::PATIENT_NAME, tags::ROWS, tags::COLUMNS]);
    assert_eq!(dataset.len(), 3);
}
