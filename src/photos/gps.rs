use crate::geo::models::Coordinate;
use exif::{Exif, In, Reader, Tag, Value};
use std::io::Cursor;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GpsExtractionError {
    #[error("the image carries no EXIF metadata")]
    NoMetadata,
    #[error("the EXIF metadata has no `{0}` tag")]
    MissingTag(Tag),
    #[error("the `{0}` tag isn't a valid degrees-minutes-seconds triple")]
    MalformedDms(Tag),
    #[error("the `{0}` tag isn't a valid hemisphere reference")]
    MalformedRef(Tag),
}

const LATITUDE_REFS: [&str; 2] = ["N", "S"];
const LONGITUDE_REFS: [&str; 2] = ["E", "W"];

/// Reads the GPS position a photo was taken at.
pub fn extract_gps(image_bytes: &[u8]) -> Result<Coordinate, GpsExtractionError> {
    let exif = Reader::new()
        .read_from_container(&mut Cursor::new(image_bytes))
        .map_err(|_| GpsExtractionError::NoMetadata)?;

    let lat = read_dms(&exif, Tag::GPSLatitude)?;
    let lat_ref = read_ref(&exif, Tag::GPSLatitudeRef, LATITUDE_REFS)?;
    let lng = read_dms(&exif, Tag::GPSLongitude)?;
    let lng_ref = read_ref(&exif, Tag::GPSLongitudeRef, LONGITUDE_REFS)?;

    let coordinate = Coordinate::new(
        dms_to_decimal(&lat, &lat_ref).ok_or(GpsExtractionError::MalformedDms(Tag::GPSLatitude))?,
        dms_to_decimal(&lng, &lng_ref)
            .ok_or(GpsExtractionError::MalformedDms(Tag::GPSLongitude))?,
    );
    tracing::debug!(lat = coordinate.lat, lng = coordinate.lng, "Found photo GPS.");
    Ok(coordinate)
}

/// Converts degrees, minutes and seconds to signed decimal degrees. Southern and western
/// references flip the sign. Returns `None` unless there are at least three finite components
/// and the reference is one of `N`, `S`, `E` or `W`.
pub fn dms_to_decimal(dms: &[f64], reference: &str) -> Option<f64> {
    let [degrees, minutes, seconds] = match dms {
        [d, m, s, ..] => [*d, *m, *s],
        _ => return None,
    };
    let decimal = degrees + minutes / 60.0 + seconds / 3600.0;
    if !decimal.is_finite() {
        return None;
    }
    match reference {
        "S" | "W" => Some(-decimal),
        "N" | "E" => Some(decimal),
        _ => None,
    }
}

fn read_dms(exif: &Exif, tag: Tag) -> Result<Vec<f64>, GpsExtractionError> {
    let field = exif
        .get_field(tag, In::PRIMARY)
        .ok_or(GpsExtractionError::MissingTag(tag))?;
    match &field.value {
        Value::Rational(parts) => Ok(parts.iter().map(|part| part.to_f64()).collect()),
        _ => Err(GpsExtractionError::MalformedDms(tag)),
    }
}

fn read_ref(exif: &Exif, tag: Tag, accepted: [&str; 2]) -> Result<String, GpsExtractionError> {
    let field = exif
        .get_field(tag, In::PRIMARY)
        .ok_or(GpsExtractionError::MissingTag(tag))?;
    let reference = match &field.value {
        Value::Ascii(strings) => strings
            .first()
            .map(|bytes| String::from_utf8_lossy(bytes).trim().to_uppercase()),
        _ => None,
    };
    match reference {
        Some(reference) if accepted.contains(&reference.as_str()) => Ok(reference),
        _ => Err(GpsExtractionError::MalformedRef(tag)),
    }
}
