//! GPS sub-block decoding.
//!
//! Converts the EXIF degrees/minutes/seconds rational encoding into signed
//! decimal degrees. Absence of GPS fields is an expected outcome and is kept
//! distinct from structurally invalid data, which always surfaces as a
//! [`GpsError`].

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use crate::models::GpsCoordinates;

use super::directory::{MetadataDirectory, TagValue};
use super::tags;

/// Structurally invalid GPS data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GpsError {
    #[error("zero denominator in {tag}")]
    ZeroDenominator { tag: &'static str },

    #[error("non-finite value in {tag}")]
    NonFinite { tag: &'static str },

    #[error("unrecognized hemisphere reference {code:?} in {tag}")]
    UnknownHemisphere { tag: &'static str, code: String },
}

/// An unsigned rational as stored in the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    pub num: u32,
    pub den: u32,
}

impl Rational {
    pub const fn new(num: u32, den: u32) -> Self {
        Self { num, den }
    }
}

/// Axis direction carried separately from the magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Parse a single-character reference code. Writers NUL-pad or
    /// space-pad the field, so surrounding noise is trimmed first.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim_matches(['\0', ' ']) {
            "N" => Some(Hemisphere::North),
            "S" => Some(Hemisphere::South),
            "E" => Some(Hemisphere::East),
            "W" => Some(Hemisphere::West),
            _ => None,
        }
    }

    /// Sign applied to the decoded magnitude.
    pub fn sign(self) -> f64 {
        match self {
            Hemisphere::North | Hemisphere::East => 1.0,
            Hemisphere::South | Hemisphere::West => -1.0,
        }
    }
}

/// Isolate the GPS sub-block of a decoded metadata directory, if present.
///
/// The pointer tag is resolved by name from the primary tag table, and the
/// sub-block's numeric IDs are translated to semantic names. Sub-tags with
/// no known name are dropped.
pub fn locate_gps_block(directory: &MetadataDirectory) -> Option<GpsDirectory> {
    let pointer = tags::tag_id("GPSInfo")?;
    match directory.get(pointer) {
        Some(TagValue::Directory(sub)) => Some(GpsDirectory::from_directory(sub)),
        _ => None,
    }
}

/// A GPS sub-block keyed by semantic tag name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GpsDirectory {
    entries: BTreeMap<&'static str, TagValue>,
}

impl GpsDirectory {
    /// Translate a raw sub-directory into named entries, dropping sub-tags
    /// the GPS table does not know.
    pub fn from_directory(directory: &MetadataDirectory) -> Self {
        let mut entries = BTreeMap::new();
        for (id, value) in directory.iter() {
            match tags::gps_tag_name(id) {
                Some(name) => {
                    entries.insert(name, value.clone());
                }
                None => debug!("dropping unknown GPS sub-tag {id:#06x}"),
            }
        }
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&TagValue> {
        self.entries.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decode the block into signed decimal degrees.
    ///
    /// Returns `Ok(None)` when any of the four coordinate fields is missing
    /// or not the shape its tag calls for; the common case is a block that
    /// carries only direction or datum information. Structural errors in
    /// fields that are present fail the whole decode, never a single axis.
    pub fn decode(&self) -> Result<Option<GpsCoordinates>, GpsError> {
        let (Some(lat), Some(lat_ref), Some(lon), Some(lon_ref)) = (
            self.triple("GPSLatitude"),
            self.reference("GPSLatitudeRef"),
            self.triple("GPSLongitude"),
            self.reference("GPSLongitudeRef"),
        ) else {
            return Ok(None);
        };

        let lat_sign = hemisphere_sign("GPSLatitudeRef", lat_ref)?;
        let lon_sign = hemisphere_sign("GPSLongitudeRef", lon_ref)?;
        let latitude = lat_sign * dms_to_decimal("GPSLatitude", &lat)?;
        let longitude = lon_sign * dms_to_decimal("GPSLongitude", &lon)?;

        Ok(Some(GpsCoordinates {
            latitude,
            longitude,
        }))
    }

    fn triple(&self, name: &str) -> Option<[Rational; 3]> {
        match self.entries.get(name) {
            Some(TagValue::Rational(values)) if values.len() >= 3 => {
                Some([values[0], values[1], values[2]])
            }
            _ => None,
        }
    }

    fn reference(&self, name: &str) -> Option<&str> {
        match self.entries.get(name) {
            Some(TagValue::Ascii(code)) => Some(code.as_str()),
            _ => None,
        }
    }
}

fn hemisphere_sign(tag: &'static str, code: &str) -> Result<f64, GpsError> {
    Hemisphere::from_code(code)
        .map(Hemisphere::sign)
        .ok_or_else(|| GpsError::UnknownHemisphere {
            tag,
            code: code.to_string(),
        })
}

/// Convert a degrees/minutes/seconds triple to unsigned decimal degrees.
fn dms_to_decimal(tag: &'static str, dms: &[Rational; 3]) -> Result<f64, GpsError> {
    let mut parts = [0.0f64; 3];
    for (part, rational) in parts.iter_mut().zip(dms) {
        if rational.den == 0 {
            return Err(GpsError::ZeroDenominator { tag });
        }
        let value = f64::from(rational.num) / f64::from(rational.den);
        if !value.is_finite() {
            return Err(GpsError::NonFinite { tag });
        }
        *part = value;
    }
    Ok(parts[0] + parts[1] / 60.0 + parts[2] / 3600.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(d: (u32, u32), m: (u32, u32), s: (u32, u32)) -> TagValue {
        TagValue::Rational(vec![
            Rational::new(d.0, d.1),
            Rational::new(m.0, m.1),
            Rational::new(s.0, s.1),
        ])
    }

    fn block(entries: &[(u16, TagValue)]) -> GpsDirectory {
        let mut raw = MetadataDirectory::new();
        for (id, value) in entries {
            raw.insert(*id, value.clone());
        }
        GpsDirectory::from_directory(&raw)
    }

    fn full_block(lat_ref: &str, lon_ref: &str) -> GpsDirectory {
        block(&[
            (0x0001, TagValue::Ascii(lat_ref.to_string())),
            (0x0002, triple((40, 1), (26, 1), (46, 1))),
            (0x0003, TagValue::Ascii(lon_ref.to_string())),
            (0x0004, triple((74, 1), (0, 1), (21, 1))),
        ])
    }

    #[test]
    fn decodes_documented_coordinates() {
        let coords = full_block("N", "W").decode().unwrap().unwrap();
        assert!((coords.latitude - 40.446111).abs() < 1e-6);
        assert!((coords.longitude + 74.005833).abs() < 1e-6);
    }

    #[test]
    fn south_mirrors_north() {
        let north = full_block("N", "E").decode().unwrap().unwrap();
        let south = full_block("S", "W").decode().unwrap().unwrap();
        assert_eq!(south.latitude, -north.latitude);
        assert_eq!(south.longitude, -north.longitude);
    }

    #[test]
    fn decode_is_deterministic() {
        let block = full_block("N", "W");
        let first = block.decode().unwrap().unwrap();
        let second = block.decode().unwrap().unwrap();
        assert_eq!(first.latitude.to_bits(), second.latitude.to_bits());
        assert_eq!(first.longitude.to_bits(), second.longitude.to_bits());
    }

    #[test]
    fn fractional_seconds_use_their_denominator() {
        let block = block(&[
            (0x0001, TagValue::Ascii("N".to_string())),
            (0x0002, triple((40, 1), (26, 1), (4675, 100))),
            (0x0003, TagValue::Ascii("E".to_string())),
            (0x0004, triple((0, 1), (0, 1), (0, 1))),
        ]);
        let coords = block.decode().unwrap().unwrap();
        let expected = 40.0 + 26.0 / 60.0 + 46.75 / 3600.0;
        assert!((coords.latitude - expected).abs() < 1e-9);
    }

    #[test]
    fn zero_denominator_fails_either_axis() {
        for position in 0..3 {
            let mut parts = [(74, 1), (0, 1), (21, 1)];
            parts[position] = (1, 0);
            let block = block(&[
                (0x0001, TagValue::Ascii("N".to_string())),
                (0x0002, triple((40, 1), (26, 1), (46, 1))),
                (0x0003, TagValue::Ascii("W".to_string())),
                (0x0004, triple(parts[0], parts[1], parts[2])),
            ]);
            assert_eq!(
                block.decode(),
                Err(GpsError::ZeroDenominator {
                    tag: "GPSLongitude"
                })
            );
        }
    }

    #[test]
    fn missing_field_is_absent_not_an_error() {
        let ids: [u16; 4] = [0x0001, 0x0002, 0x0003, 0x0004];
        for dropped in ids {
            let entries: Vec<(u16, TagValue)> = [
                (0x0001, TagValue::Ascii("N".to_string())),
                (0x0002, triple((40, 1), (26, 1), (46, 1))),
                (0x0003, TagValue::Ascii("W".to_string())),
                (0x0004, triple((74, 1), (0, 1), (21, 1))),
            ]
            .into_iter()
            .filter(|(id, _)| *id != dropped)
            .collect();
            assert_eq!(block(&entries).decode(), Ok(None));
        }
    }

    #[test]
    fn short_triple_is_absent() {
        let block = block(&[
            (0x0001, TagValue::Ascii("N".to_string())),
            (
                0x0002,
                TagValue::Rational(vec![Rational::new(40, 1), Rational::new(26, 1)]),
            ),
            (0x0003, TagValue::Ascii("W".to_string())),
            (0x0004, triple((74, 1), (0, 1), (21, 1))),
        ]);
        assert_eq!(block.decode(), Ok(None));
    }

    #[test]
    fn unknown_reference_code_is_an_error() {
        let result = full_block("N", "Q").decode();
        assert_eq!(
            result,
            Err(GpsError::UnknownHemisphere {
                tag: "GPSLongitudeRef",
                code: "Q".to_string(),
            })
        );
    }

    #[test]
    fn nul_padded_reference_is_accepted() {
        let coords = full_block("S\0", "E ").decode().unwrap().unwrap();
        assert!(coords.latitude < 0.0);
        assert!(coords.longitude > 0.0);
    }

    #[test]
    fn unknown_sub_tags_are_dropped() {
        let block = block(&[
            (0x0001, TagValue::Ascii("N".to_string())),
            (0x0002, triple((40, 1), (26, 1), (46, 1))),
            (0x0003, TagValue::Ascii("W".to_string())),
            (0x0004, triple((74, 1), (0, 1), (21, 1))),
            (0x00ee, TagValue::UInt(vec![7])),
        ]);
        assert!(block.get("GPSLatitude").is_some());
        assert!(block.decode().unwrap().is_some());
    }

    #[test]
    fn locate_returns_none_without_pointer() {
        let mut dir = MetadataDirectory::new();
        dir.insert(0x0110, TagValue::Ascii("Camera 3000".to_string()));
        assert!(locate_gps_block(&dir).is_none());
    }

    #[test]
    fn locate_translates_sub_block() {
        let mut sub = MetadataDirectory::new();
        sub.insert(0x0001, TagValue::Ascii("N".to_string()));
        sub.insert(0x00ee, TagValue::UInt(vec![7]));

        let mut dir = MetadataDirectory::new();
        dir.insert(0x8825, TagValue::Directory(sub));

        let block = locate_gps_block(&dir).unwrap();
        assert_eq!(
            block.get("GPSLatitudeRef"),
            Some(&TagValue::Ascii("N".to_string()))
        );
        // The unknown 0x00ee sub-tag is gone.
        assert_eq!(block.entries.len(), 1);
    }
}
