use crate::decode::raster::{Raster, SampleDepth};
use crate::dicom::errors::DicomError;
use crate::export::png::{encode_png, raster_to_image};

#[test]
fn test_raster_length_is_checked() {
    assert!(Raster::new(2, 2, SampleDepth::Eight, vec![0; 4]).is_ok());
    assert!(Raster::new(2, 2, SampleDepth::Sixteen, vec![0; 8]).is_ok());
    assert!(matches!(
        Raster::new(2, 2, SampleDepth::Sixteen, vec![0; 4]),
        Err(DicomError::InvalidImageData(_))
    ));
}

#[test]
fn test_raster_samples() {
    let raster = Raster::new(2, 1, SampleDepth::Sixteen, vec![0x01, 0x02, 0xFF, 0xFE]).unwrap();

    assert_eq!(raster.samples(), vec![0x0102u16, 0xFFFE]);
    assert_eq!(raster.sample(1, 0), Some(0xFFFE));
    assert_eq!(raster.sample(2, 0), None);
    assert_eq!(raster.sample(0, 1), None);
}

#[test]
fn test_sample_depth_for_bits_allocated() {
    assert_eq!(SampleDepth::for_bits_allocated(8), SampleDepth::Eight);
    assert_eq!(SampleDepth::for_bits_allocated(12), SampleDepth::Sixteen);
    assert_eq!(SampleDepth::for_bits_allocated(16), SampleDepth::Sixteen);
    assert_eq!(SampleDepth::Sixteen.bytes(), 2);
}

#[test]
fn test_png_color_types() {
    let eight = Raster::new(2, 2, SampleDepth::Eight, vec![0, 1, 2, 3]).unwrap();
    let sixteen = Raster::new(1, 1, SampleDepth::Sixteen, vec![0xAB, 0xCD]).unwrap();

    assert_eq!(raster_to_image(&eight).unwrap().color(), image::ColorType::L8);

    let image = raster_to_image(&sixteen).unwrap();
    assert_eq!(image.color(), image::ColorType::L16);
    assert_eq!(image.as_luma16().unwrap().get_pixel(0, 0).0, [0xABCD]);
}

#[test]
fn test_png_encoding_round_trips() {
    let raster = Raster::new(3, 2, SampleDepth::Sixteen, vec![0, 0, 0x80, 0x07, 0xFF, 0xFF, 0, 1, 0, 2, 0, 3]).unwrap();

    let png = encode_png(&raster).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory_with_format(&png, image::ImageFormat::Png).unwrap();
    assert_eq!(decoded.width(), 3);
    assert_eq!(decoded.height(), 2);
    assert_eq!(decoded.as_luma16().unwrap().as_raw(), &vec![0u16, 0x8007, 0xFFFF, 1, 2, 3]);
}
