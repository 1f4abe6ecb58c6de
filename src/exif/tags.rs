//! Numeric tag identifiers and their semantic names.
//!
//! Two separate tables mirror the TIFF/EXIF layout: primary-directory tags
//! (including the GPSInfo pointer) and the GPS sub-directory tags. Lookups
//! that need the GPSInfo identifier resolve it by name from the primary
//! table so the identifier lives in exactly one place.

/// Primary-directory tags. Incomplete by design; add here as needed.
pub const TAG_NAMES: &[(u16, &str)] = &[
    (0x0100, "ImageWidth"),
    (0x0101, "ImageLength"),
    (0x010e, "ImageDescription"),
    (0x010f, "Make"),
    (0x0110, "Model"),
    (0x0112, "Orientation"),
    (0x0131, "Software"),
    (0x0132, "DateTime"),
    (0x8769, "ExifOffset"),
    (0x8825, "GPSInfo"),
    (0x9003, "DateTimeOriginal"),
    (0xa002, "PixelXDimension"),
    (0xa003, "PixelYDimension"),
];

/// GPS sub-directory tags, per the EXIF 2.3 numbering.
pub const GPS_TAG_NAMES: &[(u16, &str)] = &[
    (0x0000, "GPSVersionID"),
    (0x0001, "GPSLatitudeRef"),
    (0x0002, "GPSLatitude"),
    (0x0003, "GPSLongitudeRef"),
    (0x0004, "GPSLongitude"),
    (0x0005, "GPSAltitudeRef"),
    (0x0006, "GPSAltitude"),
    (0x0007, "GPSTimeStamp"),
    (0x0008, "GPSSatellites"),
    (0x0009, "GPSStatus"),
    (0x000a, "GPSMeasureMode"),
    (0x000b, "GPSDOP"),
    (0x000c, "GPSSpeedRef"),
    (0x000d, "GPSSpeed"),
    (0x000e, "GPSTrackRef"),
    (0x000f, "GPSTrack"),
    (0x0010, "GPSImgDirectionRef"),
    (0x0011, "GPSImgDirection"),
    (0x0012, "GPSMapDatum"),
    (0x0013, "GPSDestLatitudeRef"),
    (0x0014, "GPSDestLatitude"),
    (0x0015, "GPSDestLongitudeRef"),
    (0x0016, "GPSDestLongitude"),
    (0x0017, "GPSDestBearingRef"),
    (0x0018, "GPSDestBearing"),
    (0x0019, "GPSDestDistanceRef"),
    (0x001a, "GPSDestDistance"),
    (0x001b, "GPSProcessingMethod"),
    (0x001c, "GPSAreaInformation"),
    (0x001d, "GPSDateStamp"),
    (0x001e, "GPSDifferential"),
    (0x001f, "GPSHPositioningError"),
];

/// Look up the semantic name of a primary-directory tag.
pub fn tag_name(id: u16) -> Option<&'static str> {
    TAG_NAMES
        .iter()
        .find(|(tag_id, _)| *tag_id == id)
        .map(|(_, name)| *name)
}

/// Look up a primary-directory tag identifier by semantic name.
pub fn tag_id(name: &str) -> Option<u16> {
    TAG_NAMES
        .iter()
        .find(|(_, tag_name)| *tag_name == name)
        .map(|(id, _)| *id)
}

/// Look up the semantic name of a GPS sub-directory tag.
pub fn gps_tag_name(id: u16) -> Option<&'static str> {
    GPS_TAG_NAMES
        .iter()
        .find(|(tag_id, _)| *tag_id == id)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gps_info_resolves_by_name() {
        let id = tag_id("GPSInfo").unwrap();
        assert_eq!(id, 0x8825);
        assert_eq!(tag_name(id), Some("GPSInfo"));
    }

    #[test]
    fn gps_coordinate_tags_resolve() {
        assert_eq!(gps_tag_name(0x0001), Some("GPSLatitudeRef"));
        assert_eq!(gps_tag_name(0x0002), Some("GPSLatitude"));
        assert_eq!(gps_tag_name(0x0003), Some("GPSLongitudeRef"));
        assert_eq!(gps_tag_name(0x0004), Some("GPSLongitude"));
    }

    #[test]
    fn unknown_ids_have_no_name() {
        assert_eq!(tag_name(0xdead), None);
        assert_eq!(gps_tag_name(0x00ee), None);
        assert_eq!(tag_id("NoSuchTag"), None);
    }
}
