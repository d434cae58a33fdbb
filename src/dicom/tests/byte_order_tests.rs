//! Tests for the byte order module

extern crate std;

use std::io::Cursor;
use byteorder::{LittleEndian, BigEndian, WriteBytesExt};
use crate::dicom::constants::transfer_syntax;
use crate::io::byte_order::{ByteOrder, ByteOrderHandler, LittleEndianHandler, BigEndianHandler};

#[test]
fn test_byte_order_from_transfer_syntax() {
    std::assert_eq!(ByteOrder::from_transfer_syntax(transfer_syntax::IMPLICIT_VR_LITTLE_ENDIAN), ByteOrder::LittleEndian);
    std::assert_eq!(ByteOrder::from_transfer_syntax(transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN), ByteOrder::LittleEndian);
    std::assert_eq!(ByteOrder::from_transfer_syntax(transfer_syntax::EXPLICIT_VR_BIG_ENDIAN), ByteOrder::BigEndian);
    // JPEG baseline headers are little-endian
    std::assert_eq!(ByteOrder::from_transfer_syntax("1.2.840.10008.1.2.4.50"), ByteOrder::LittleEndian);
}

#[test]
fn test_little_endian_handler() {
    let mut buffer = Vec::new();
    buffer.write_u16::<LittleEndian>(0x1234).unwrap();
    buffer.write_u32::<LittleEndian>(0x12345678).unwrap();
    buffer.write_i16::<LittleEndian>(-2).unwrap();
    buffer.write_f64::<LittleEndian>(1.5).unwrap();
    let mut cursor = Cursor::new(buffer);

    let handler = LittleEndianHandler;

    std::assert_eq!(handler.read_u16(&mut cursor).unwrap(), 0x1234);
    std::assert_eq!(handler.read_u32(&mut cursor).unwrap(), 0x12345678);
    std::assert_eq!(handler.read_i16(&mut cursor).unwrap(), -2);
    std::assert_eq!(handler.read_f64(&mut cursor).unwrap(), 1.5);
}

#[test]
fn test_big_endian_handler() {
    let mut buffer = Vec::new();
    buffer.write_u16::<BigEndian>(0x1234).unwrap();
    buffer.write_i32::<BigEndian>(-70000).unwrap();
    buffer.write_f32::<BigEndian>(0.25).unwrap();
    let mut cursor = Cursor::new(buffer);

    let handler = BigEndianHandler;

    std::assert_eq!(handler.read_u16(&mut cursor).unwrap(), 0x1234);
    std::assert_eq!(handler.read_i32(&mut cursor).unwrap(), -70000);
    std::assert_eq!(handler.read_f32(&mut cursor).unwrap(), 0.25);
}

#[test]
fn test_read_tag_pair() {
    let bytes = [0x28, 0x00, 0x10, 0x00];
    let mut cursor = Cursor::new(bytes);

    let handler = ByteOrder::LittleEndian.create_handler();
    std::assert_eq!(handler.read_tag(&mut cursor).unwrap(), (0x0028, 0x0010));
}

#[test]
fn test_short_read_fails() {
    let mut cursor = Cursor::new(vec![0x01]);
    std::assert!(LittleEndianHandler.read_u16(&mut cursor).is_err());
}
