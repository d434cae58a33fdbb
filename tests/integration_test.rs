//! Integration tests for the file store, header lookup and PNG export

extern crate std;

use std::fs;
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, WriteBytesExt};
use tempfile::TempDir;

use dicomkit::commands::{build_cli, CommandFactory, DicomkitCommandFactory};
use dicomkit::config::AppConfig;
use dicomkit::dicom::DicomError;
use dicomkit::utils::logger::Logger;
use dicomkit::{DicomKit, DicomResult, TypedValue};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn element(buffer: &mut Vec<u8>, group: u16, elem: u16, vr: &[u8; 2], value: &[u8]) {
    buffer.write_u16::<LittleEndian>(group).unwrap();
    buffer.write_u16::<LittleEndian>(elem).unwrap();
    buffer.extend_from_slice(vr);
    if matches!(vr, b"OB" | b"OW") {
        buffer.extend_from_slice(&[0, 0]);
        buffer.write_u32::<LittleEndian>(value.len() as u32).unwrap();
    } else {
        buffer.write_u16::<LittleEndian>(value.len() as u16).unwrap();
    }
    buffer.extend_from_slice(value);
}

/// A Part 10 Explicit VR Little Endian file holding a 2x2 12-bit image
fn sample_dicom() -> Vec<u8> {
    let mut buffer = vec![0u8; 128];
    buffer.extend_from_slice(b"DICM");

    element(&mut buffer, 0x0002, 0x0010, b"UI", b"1.2.840.10008.1.2.1\0");
    element(&mut buffer, 0x0008, 0x0020, b"DA", b"20240315");
    element(&mut buffer, 0x0010, 0x0010, b"PN", b"Doe^Jane");
    element(&mut buffer, 0x0018, 0x0050, b"DS", b"3.2125");
    element(&mut buffer, 0x0028, 0x0010, b"US", &2u16.to_le_bytes());
    element(&mut buffer, 0x0028, 0x0011, b"US", &2u16.to_le_bytes());
    element(&mut buffer, 0x0028, 0x0100, b"US", &16u16.to_le_bytes());
    element(&mut buffer, 0x0028, 0x0101, b"US", &12u16.to_le_bytes());
    element(&mut buffer, 0x7FE0, 0x0010, b"OW", &[0x0F, 0xFF, 0x00, 0x00, 0x08, 0x00, 0x00, 0x01]);

    buffer
}

struct Fixture {
    dir: TempDir,
    kit: DicomKit,
}

impl Fixture {
    fn new() -> Self {
        init_logging();
        let dir = TempDir::new().unwrap();
        let config = AppConfig::default().with_data_dir(dir.path().join("data"));
        Fixture { kit: DicomKit::new(config), dir }
    }

    fn write_source(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, bytes).unwrap();
        path
    }
}

#[test]
fn test_upload_and_read_headers() {
    let fixture = Fixture::new();
    let source = fixture.write_source("sample.dcm", &sample_dicom());

    let file_id = fixture.kit.upload(&[source]).unwrap();
    std::assert!(fixture.dir.path().join("data").join(&file_id).is_file());

    std::assert_eq!(
        fixture.kit.header_value(&file_id, "00100010").unwrap(),
        TypedValue::Str("Doe^Jane".to_string())
    );
    std::assert_eq!(fixture.kit.header_value(&file_id, "00280010").unwrap(), TypedValue::UnsignedShort(2));
    std::assert_eq!(fixture.kit.header_value(&file_id, "00180050").unwrap(), TypedValue::Decimal(3.2125));

    let missing = fixture.kit.header_value(&file_id, "00200013").unwrap_err();
    std::assert_eq!(missing.code(), "ERR_ELEMENT_NOT_FOUND");
    std::assert!(missing.is_client_error());
}

#[test]
fn test_export_png() {
    let fixture = Fixture::new();
    let source = fixture.write_source("sample.dcm", &sample_dicom());
    let file_id = fixture.kit.upload(&[source]).unwrap();

    let output = fixture.kit.export_png(&file_id).unwrap();

    std::assert_eq!(output, fixture.dir.path().join("data").join("export").join(format!("{}.png", file_id)));
    let image = image::open(&output).unwrap();
    std::assert_eq!(image.as_luma16().unwrap().as_raw(), &vec![65535u16, 0, 32775, 16]);
}

#[test]
fn test_describe_lists_elements() {
    let fixture = Fixture::new();
    let source = fixture.write_source("sample.dcm", &sample_dicom());
    let file_id = fixture.kit.upload(&[source]).unwrap();

    let summary = fixture.kit.describe(&file_id).unwrap();

    std::assert!(summary.contains("PatientName"));
    std::assert!(summary.contains("Doe^Jane"));
    std::assert!(summary.contains("<8 bytes>"));
}

#[test]
fn test_upload_rejections() {
    let fixture = Fixture::new();
    let source = fixture.write_source("sample.dcm", &sample_dicom());

    let none = fixture.kit.upload(&[]).unwrap_err();
    std::assert!(matches!(none, DicomError::FileNotFound(_)));

    let many = fixture.kit.upload(&[source.clone(), source.clone()]).unwrap_err();
    std::assert!(matches!(many, DicomError::MultiFileUnsupported(2)));
    std::assert!(many.is_client_error());

    let absent = fixture.kit.upload(&[fixture.dir.path().join("absent.dcm")]).unwrap_err();
    std::assert!(matches!(absent, DicomError::FileNotFound(_)));

    let garbage = fixture.write_source("notes.txt", b"this is not a dicom file at all");
    let invalid = fixture.kit.upload(&[garbage]).unwrap_err();
    std::assert_eq!(invalid.code(), "ERR_INVALID_DICOM");

    let mut bytes = vec![0u8; 128];
    bytes.extend_from_slice(b"DICM");
    element(&mut bytes, 0x0002, 0x0010, b"UI", b"1.2.840.10008.1.2.1\0");
    element(&mut bytes, 0x0010, 0x0010, b"PN", b"Doe^Jane");
    let no_study_date = fixture.write_source("incomplete.dcm", &bytes);
    std::assert!(matches!(fixture.kit.upload(&[no_study_date]), Err(DicomError::InvalidDicom(_))));
}

#[test]
fn test_upload_size_limit() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let mut config = AppConfig::default().with_data_dir(dir.path());
    config.max_file_size = 64;
    let kit = DicomKit::new(config);

    let source = dir.path().join("large.dcm");
    fs::write(&source, sample_dicom()).unwrap();

    match kit.upload(&[source]) {
        Err(DicomError::FileTooLarge { limit, .. }) => std::assert_eq!(limit, 64),
        other => panic!("expected FileTooLarge, got {:?}", other),
    }
}

#[test]
fn test_unknown_file_id() {
    let fixture = Fixture::new();

    let error = fixture.kit.header_value("does-not-exist", "00100010").unwrap_err();
    std::assert_eq!(error.code(), "ERR_FILE_NOT_FOUND");
    std::assert!(matches!(fixture.kit.open("../escape"), Err(DicomError::FileNotFound(_))));
}

#[test]
fn test_config_from_toml() {
    let config = AppConfig::from_str(
        r#"
data_dir = "/srv/dicom"
max_file_size = 2048
log_file = "service.log"
"#,
    )
    .unwrap();

    std::assert_eq!(config.data_dir, Path::new("/srv/dicom"));
    std::assert_eq!(config.export_dir, Path::new("/srv/dicom/export"));
    std::assert_eq!(config.max_file_size, 2048);
    std::assert_eq!(config.log_file, "service.log");

    std::assert!(AppConfig::from_str("max_file_size = -1").is_err());
    std::assert!(AppConfig::from_str("data_dir = 3").is_err());
}

#[test]
fn test_logger_writes_file() {
    let dir = TempDir::new().unwrap();
    let log_file = dir.path().join("dicomkit.log");
    let logger = Logger::new(log_file.to_str().unwrap()).unwrap();

    logger.log("Exported sample").unwrap();

    let contents = fs::read_to_string(&log_file).unwrap();
    std::assert!(contents.contains("Exported sample"));
}

#[test]
fn test_commands_from_command_line() {
    let fixture = Fixture::new();
    let source = fixture.write_source("sample.dcm", &sample_dicom());
    let log_file = fixture.dir.path().join("dicomkit.log");
    let logger = Logger::new(log_file.to_str().unwrap()).unwrap();
    let factory = DicomkitCommandFactory::new();

    let run = |args: &[&str]| -> DicomResult<()> {
        let matches = build_cli().try_get_matches_from(args).unwrap();
        factory.create_command(&matches, &fixture.kit, &logger)?.execute()
    };

    run(&["dicomkit", "--upload", source.to_str().unwrap()]).unwrap();

    let stored: Vec<String> = fs::read_dir(fixture.dir.path().join("data"))
        .unwrap()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    std::assert_eq!(stored.len(), 1);
    let file_id = stored[0].as_str();

    run(&["dicomkit", "--tag", "00100010", file_id]).unwrap();
    run(&["dicomkit", file_id]).unwrap();
    run(&["dicomkit", "--image", file_id]).unwrap();
    std::assert!(fixture.kit.store().export_path(file_id).is_file());

    let missing = run(&["dicomkit", "--tag", "00200013", file_id]).unwrap_err();
    std::assert_eq!(missing.code(), "ERR_ELEMENT_NOT_FOUND");
    let no_ids = run(&["dicomkit", "--image"]).unwrap_err();
    std::assert_eq!(no_ids.code(), "ERR_FILE_NOT_FOUND");

    let contents = fs::read_to_string(&log_file).unwrap();
    std::assert!(contents.contains(file_id));
}
