//! Container metadata decoding.
//!
//! Decoding is a capability selected by sniffing the byte format: containers
//! that embed a TIFF-structured EXIF segment get the reader-backed decoder,
//! image formats with no metadata segment get a trivial one, and anything
//! that is not a recognizable image is a decode failure.

use std::io::Cursor;

use thiserror::Error;

use super::directory::{MetadataDirectory, TagValue};
use super::gps::Rational;
use super::tags;

/// The bytes could not be decoded as an image container.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unrecognized image format")]
    UnrecognizedFormat,

    #[error("invalid {format} container: {source}")]
    Invalid {
        format: &'static str,
        #[source]
        source: exif::Error,
    },
}

/// A format-specific metadata decoding capability.
pub trait MetadataDecoder: Send + Sync {
    /// Container name used in errors and logs.
    fn format(&self) -> &'static str;

    /// Decode the container's metadata directory.
    ///
    /// `Ok(None)` means the image is valid but carries no metadata
    /// directory; bytes the decoder cannot make sense of are an error.
    fn decode(&self, bytes: &[u8]) -> Result<Option<MetadataDirectory>, DecodeError>;
}

/// Pick a decoder for the supplied bytes by sniffing the container format.
pub fn decoder_for(bytes: &[u8]) -> Result<&'static dyn MetadataDecoder, DecodeError> {
    let kind = infer::get(bytes).ok_or(DecodeError::UnrecognizedFormat)?;
    if kind.matcher_type() != infer::MatcherType::Image {
        return Err(DecodeError::UnrecognizedFormat);
    }
    Ok(match kind.mime_type() {
        "image/jpeg" => &JPEG,
        "image/tiff" => &TIFF,
        "image/png" => &PNG,
        "image/webp" => &WEBP,
        "image/heif" | "image/heic" => &HEIF,
        // Valid image formats with nowhere to put a metadata directory.
        _ => &PLAIN,
    })
}

static JPEG: ExifSegmentDecoder = ExifSegmentDecoder { format: "JPEG" };
static TIFF: ExifSegmentDecoder = ExifSegmentDecoder { format: "TIFF" };
static PNG: ExifSegmentDecoder = ExifSegmentDecoder { format: "PNG" };
static WEBP: ExifSegmentDecoder = ExifSegmentDecoder { format: "WebP" };
static HEIF: ExifSegmentDecoder = ExifSegmentDecoder { format: "HEIF" };
static PLAIN: PlainImageDecoder = PlainImageDecoder;

/// Decoder for containers that embed a TIFF-structured EXIF segment.
struct ExifSegmentDecoder {
    format: &'static str,
}

impl MetadataDecoder for ExifSegmentDecoder {
    fn format(&self) -> &'static str {
        self.format
    }

    fn decode(&self, bytes: &[u8]) -> Result<Option<MetadataDirectory>, DecodeError> {
        let mut cursor = Cursor::new(bytes);
        match exif::Reader::new().read_from_container(&mut cursor) {
            Ok(parsed) => Ok(Some(build_directory(&parsed))),
            // A readable container without an EXIF segment is absence,
            // not a failure.
            Err(exif::Error::NotFound(_)) => Ok(None),
            Err(source) => Err(DecodeError::Invalid {
                format: self.format,
                source,
            }),
        }
    }
}

/// Decoder for image formats that cannot carry a metadata directory.
struct PlainImageDecoder;

impl MetadataDecoder for PlainImageDecoder {
    fn format(&self) -> &'static str {
        "plain image"
    }

    fn decode(&self, _bytes: &[u8]) -> Result<Option<MetadataDirectory>, DecodeError> {
        Ok(None)
    }
}

/// Flatten the parsed fields into a primary directory with the GPS block
/// nested under its pointer tag. The pointer ID comes from the same table
/// the locator consults.
fn build_directory(parsed: &exif::Exif) -> MetadataDirectory {
    let mut primary = MetadataDirectory::new();
    let mut gps = MetadataDirectory::new();

    for field in parsed.fields() {
        if field.ifd_num != exif::In::PRIMARY {
            continue;
        }
        match field.tag.context() {
            exif::Context::Gps => gps.insert(field.tag.number(), raw_value(&field.value)),
            exif::Context::Tiff | exif::Context::Exif => {
                primary.insert(field.tag.number(), raw_value(&field.value));
            }
            _ => {}
        }
    }

    if !gps.is_empty() {
        if let Some(pointer) = tags::tag_id("GPSInfo") {
            primary.insert(pointer, TagValue::Directory(gps));
        }
    }
    primary
}

fn raw_value(value: &exif::Value) -> TagValue {
    match value {
        exif::Value::Ascii(lines) => TagValue::Ascii(
            lines
                .iter()
                .map(|line| String::from_utf8_lossy(line).into_owned())
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        exif::Value::Byte(bytes) => TagValue::Bytes(bytes.clone()),
        exif::Value::Undefined(bytes, _) => TagValue::Bytes(bytes.clone()),
        exif::Value::Short(values) => TagValue::UInt(values.iter().map(|v| u32::from(*v)).collect()),
        exif::Value::Long(values) => TagValue::UInt(values.clone()),
        exif::Value::Rational(values) => TagValue::Rational(
            values
                .iter()
                .map(|r| Rational::new(r.num, r.denom))
                .collect(),
        ),
        _ => TagValue::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // SOI, a JFIF APP0 segment, EOI. Decodable, but nothing to read.
    fn jpeg_without_metadata() -> Vec<u8> {
        let mut bytes = vec![0xff, 0xd8];
        bytes.extend_from_slice(&[0xff, 0xe0, 0x00, 0x10]);
        bytes.extend_from_slice(b"JFIF\0");
        bytes.extend_from_slice(&[0x01, 0x01, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00]);
        bytes.extend_from_slice(&[0xff, 0xd9]);
        bytes
    }

    #[test]
    fn arbitrary_bytes_are_not_an_image() {
        let result = decoder_for(b"definitely not an image");
        assert!(matches!(result, Err(DecodeError::UnrecognizedFormat)));
    }

    #[test]
    fn empty_input_is_not_an_image() {
        assert!(matches!(
            decoder_for(&[]),
            Err(DecodeError::UnrecognizedFormat)
        ));
    }

    #[test]
    fn jpeg_without_metadata_is_absent() {
        let bytes = jpeg_without_metadata();
        let decoder = decoder_for(&bytes).unwrap();
        assert_eq!(decoder.format(), "JPEG");
        assert!(decoder.decode(&bytes).unwrap().is_none());
    }

    #[test]
    fn metadata_free_formats_get_the_plain_decoder() {
        let mut gif = b"GIF89a".to_vec();
        gif.extend_from_slice(&[0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00]);
        let decoder = decoder_for(&gif).unwrap();
        assert_eq!(decoder.format(), "plain image");
        assert!(decoder.decode(&gif).unwrap().is_none());
    }
}
