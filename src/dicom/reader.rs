//! DICOM file reader implementation
//!
//! Reads a Part 10 file (or a bare dataset) into a [`Dataset`]. The reader
//! only locates elements; it never decodes values. Sequences and
//! encapsulated pixel data are walked to find their end but their contents
//! are not exposed as top-level elements.

use log::{debug, info, trace};
use std::fs;
use std::path::Path;

use crate::dicom::constants::{header, tags, transfer_syntax};
use crate::dicom::dataset::Dataset;
use crate::dicom::dictionary;
use crate::dicom::element::DataElement;
use crate::dicom::errors::{DicomError, DicomResult};
use crate::dicom::tag::Tag;
use crate::dicom::vr::Vr;
use crate::io::byte_order::{ByteOrder, ByteOrderHandler};

/// Reader for DICOM Part 10 files
pub struct DicomReader {
    /// Transfer syntax assumed when the file carries no meta information
    default_transfer_syntax: String,
}

impl Default for DicomReader {
    fn default() -> Self {
        DicomReader {
            default_transfer_syntax: transfer_syntax::IMPLICIT_VR_LITTLE_ENDIAN.to_string(),
        }
    }
}

impl DicomReader {
    /// Creates a reader that falls back to Implicit VR Little Endian
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the transfer syntax used for files without a meta group
    pub fn with_default_transfer_syntax(uid: &str) -> Self {
        DicomReader {
            default_transfer_syntax: uid.to_string(),
        }
    }

    /// Loads and parses a file from disk
    pub fn load(&self, path: &Path) -> DicomResult<Dataset> {
        info!("Loading DICOM file: {}", path.display());
        let bytes = fs::read(path).map_err(|e| {
            DicomError::FileNotFound(format!("{}: {}", path.display(), e))
        })?;

        self.parse(bytes)
    }

    /// Parses an in-memory file
    ///
    /// 1. Detect the preamble and `DICM` magic
    /// 2. Read the file meta group (explicit VR little endian)
    /// 3. Read the dataset with the encoding named by its transfer syntax
    pub fn parse(&self, bytes: Vec<u8>) -> DicomResult<Dataset> {
        debug!("DicomReader::parse starting ({} bytes)", bytes.len());

        let mut elements = Vec::new();

        let (start, syntax) = if has_magic(&bytes) {
            let mut meta = ElementParser::new(&bytes, header::PREAMBLE_LENGTH + header::MAGIC.len(), true, ByteOrder::LittleEndian);
            while meta.peek_group() == Some(header::META_GROUP) {
                let element = meta.read_element()?;
                trace!("Meta element: {}", element);
                elements.push(element);
            }

            let syntax = meta_transfer_syntax(&bytes, &elements)
                .unwrap_or_else(|| self.default_transfer_syntax.clone());
            (meta.pos, syntax)
        } else {
            debug!("No DICM magic found, reading bare dataset");
            (0, self.default_transfer_syntax.clone())
        };

        if syntax == transfer_syntax::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN {
            return Err(DicomError::FileParsingFailed(
                "deflated transfer syntax is not supported".to_string(),
            ));
        }

        let explicit_vr = syntax != transfer_syntax::IMPLICIT_VR_LITTLE_ENDIAN;
        let byte_order = ByteOrder::from_transfer_syntax(&syntax);
        debug!(
            "Transfer syntax {} ({} VR, {})",
            syntax,
            if explicit_vr { "explicit" } else { "implicit" },
            byte_order.name()
        );

        let mut parser = ElementParser::new(&bytes, start, explicit_vr, byte_order);
        while !parser.at_end() {
            let element = parser.read_element()?;
            trace!("Dataset element: {}", element);
            elements.push(element);
        }

        debug!("Parsed {} elements", elements.len());
        Ok(Dataset::new(bytes, elements, byte_order, syntax))
    }
}

fn has_magic(bytes: &[u8]) -> bool {
    let start = header::PREAMBLE_LENGTH;
    bytes.get(start..start + header::MAGIC.len()) == Some(&header::MAGIC[..])
}

fn meta_transfer_syntax(bytes: &[u8], meta: &[DataElement]) -> Option<String> {
    let element = meta.iter().find(|e| e.tag == tags::TRANSFER_SYNTAX_UID)?;
    let raw = bytes.get(element.range())?;
    let uid: String = raw.iter().map(|&b| b as char).collect();
    Some(uid.trim_end_matches(['\0', ' ']).trim().to_string())
}

/// Deepest nesting of undefined-length sequences and items that is walked
pub const MAX_NESTING_DEPTH: usize = 64;

/// Element header as read from the stream
struct ElementHeader {
    tag: Tag,
    vr: Vr,
    length: u32,
}

/// Cursor over a byte buffer that locates elements
struct ElementParser<'b> {
    bytes: &'b [u8],
    pos: usize,
    explicit_vr: bool,
    handler: Box<dyn ByteOrderHandler>,
    /// Undefined-length elements currently open
    depth: usize,
}

impl<'b> ElementParser<'b> {
    fn new(bytes: &'b [u8], pos: usize, explicit_vr: bool, byte_order: ByteOrder) -> Self {
        ElementParser {
            bytes,
            pos,
            explicit_vr,
            handler: byte_order.create_handler(),
            depth: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Group number of the next element, without consuming it
    fn peek_group(&self) -> Option<u16> {
        let mut slice = self.bytes.get(self.pos..self.pos + 2)?;
        self.handler.read_u16(&mut slice).ok()
    }

    fn take(&mut self, n: usize) -> DicomResult<&'b [u8]> {
        let bytes = self.bytes;
        let end = self.pos.checked_add(n).filter(|&end| end <= bytes.len()).ok_or_else(|| {
            DicomError::FileParsingFailed(format!(
                "unexpected end of data: {} bytes needed at offset {}, {} available",
                n,
                self.pos,
                bytes.len().saturating_sub(self.pos)
            ))
        })?;

        let slice = &bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn read_u16(&mut self) -> DicomResult<u16> {
        let mut slice = self.take(2)?;
        Ok(self.handler.read_u16(&mut slice)?)
    }

    fn read_u32(&mut self) -> DicomResult<u32> {
        let mut slice = self.take(4)?;
        Ok(self.handler.read_u32(&mut slice)?)
    }

    fn read_tag(&mut self) -> DicomResult<Tag> {
        let mut slice = self.take(4)?;
        let (group, element) = self.handler.read_tag(&mut slice)?;
        Ok(Tag::new(group, element))
    }

    fn read_header(&mut self) -> DicomResult<ElementHeader> {
        let tag = self.read_tag()?;

        // Item and delimiter tags never carry a VR
        if tag.is_delimiter() {
            let length = self.read_u32()?;
            return Ok(ElementHeader { tag, vr: Vr::UN, length });
        }

        if !self.explicit_vr {
            let length = self.read_u32()?;
            return Ok(ElementHeader { tag, vr: dictionary::implicit_vr(tag), length });
        }

        let code = self.take(2)?;
        let vr = Vr::from_bytes([code[0], code[1]]).ok_or_else(|| {
            DicomError::FileParsingFailed(format!(
                "invalid VR {:02X}{:02X} for element {} at offset {}",
                code[0],
                code[1],
                tag,
                self.pos - 2
            ))
        })?;

        let length = if vr.has_long_length() {
            self.take(2)?;
            self.read_u32()?
        } else {
            self.read_u16()? as u32
        };

        Ok(ElementHeader { tag, vr, length })
    }

    /// Reads one element header and locates its value
    fn read_element(&mut self) -> DicomResult<DataElement> {
        let header_offset = self.pos;
        let element_header = self.read_header()?;

        if element_header.tag.is_delimiter() {
            return Err(DicomError::FileParsingFailed(format!(
                "unexpected delimiter {} at offset {}",
                element_header.tag, header_offset
            )));
        }

        self.read_value(element_header)
    }

    fn read_value(&mut self, element_header: ElementHeader) -> DicomResult<DataElement> {
        let offset = self.pos;

        if element_header.length != header::UNDEFINED_LENGTH {
            self.take(element_header.length as usize)?;
            return Ok(DataElement::new(element_header.tag, element_header.vr, offset, element_header.length as usize));
        }

        if self.depth >= MAX_NESTING_DEPTH {
            return Err(DicomError::FileParsingFailed(format!(
                "element {} at offset {} nests deeper than {} levels",
                element_header.tag, offset, MAX_NESTING_DEPTH
            )));
        }

        self.depth += 1;
        let content_end = self.skip_undefined_length(element_header.vr);
        self.depth -= 1;
        let content_end = content_end?;

        Ok(DataElement {
            tag: element_header.tag,
            vr: element_header.vr,
            offset,
            length: content_end - offset,
            undefined_length: true,
        })
    }

    /// Walks the contents of an undefined-length value, returning the offset
    /// where its closing delimiter starts
    fn skip_undefined_length(&mut self, vr: Vr) -> DicomResult<usize> {
        match vr {
            Vr::SQ => self.skip_sequence(),
            // Undefined-length UN holds a sequence encoded as implicit VR
            Vr::UN => {
                let explicit_vr = self.explicit_vr;
                self.explicit_vr = false;
                let end = self.skip_sequence();
                self.explicit_vr = explicit_vr;
                end
            }
            _ => self.skip_fragments(),
        }
    }

    /// Skips sequence items up to the sequence delimiter, returning the
    /// offset where the delimiter starts
    fn skip_sequence(&mut self) -> DicomResult<usize> {
        loop {
            let item_start = self.pos;
            let tag = self.read_tag()?;
            let length = self.read_u32()?;

            match tag {
                tags::SEQUENCE_DELIMITATION => return Ok(item_start),
                tags::ITEM if length == header::UNDEFINED_LENGTH => self.skip_item_contents()?,
                tags::ITEM => {
                    self.take(length as usize)?;
                }
                _ => {
                    return Err(DicomError::FileParsingFailed(format!(
                        "expected sequence item at offset {}, found {}",
                        item_start, tag
                    )))
                }
            }
        }
    }

    /// Skips the elements of an undefined-length item through its delimiter
    fn skip_item_contents(&mut self) -> DicomResult<()> {
        loop {
            let header_offset = self.pos;
            let element_header = self.read_header()?;

            if element_header.tag == tags::ITEM_DELIMITATION {
                return Ok(());
            }
            if element_header.tag.is_delimiter() {
                return Err(DicomError::FileParsingFailed(format!(
                    "unexpected delimiter {} inside item at offset {}",
                    element_header.tag, header_offset
                )));
            }

            self.read_value(element_header)?;
        }
    }

    /// Walks encapsulated pixel data fragments, returning the offset where
    /// the sequence delimiter starts
    fn skip_fragments(&mut self) -> DicomResult<usize> {
        loop {
            let item_start = self.pos;
            let tag = self.read_tag()?;
            let length = self.read_u32()?;

            match tag {
                tags::SEQUENCE_DELIMITATION => return Ok(item_start),
                tags::ITEM if length != header::UNDEFINED_LENGTH => {
                    self.take(length as usize)?;
                }
                _ => {
                    return Err(DicomError::FileParsingFailed(format!(
                        "malformed encapsulated fragment {} at offset {}",
                        tag, item_start
                    )))
                }
            }
        }
    }
}
