use crate::geo::models::Coordinate;
use crate::proximity::policy::{DeviceLocation, GeolocationError};
use crate::reviews::models::TravelType;
use axum::body::Bytes;
use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("failed to read the multipart body: {0}")]
    Multipart(#[from] MultipartError),
    #[error("the `{0}` field has an invalid value")]
    InvalidField(&'static str),
}

/// Fields of a review form. Everything is optional at this stage, the handlers decide what's
/// required.
#[derive(Debug, Default)]
pub struct ReviewUpload {
    pub photo: Option<Bytes>,
    pub travel_type: Option<TravelType>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub geolocation_error: Option<GeolocationError>,
}

impl ReviewUpload {
    pub async fn read(mut multipart: Multipart) -> Result<Self, UploadError> {
        let mut upload = Self::default();
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some("photo") => {
                    let bytes = field.bytes().await?;
                    if !bytes.is_empty() {
                        upload.photo = Some(bytes);
                    }
                }
                Some("travelType") => {
                    upload.travel_type = Some(parse(&field.text().await?, "travelType")?);
                }
                Some("latitude") => {
                    upload.latitude = Some(parse(&field.text().await?, "latitude")?);
                }
                Some("longitude") => {
                    upload.longitude = Some(parse(&field.text().await?, "longitude")?);
                }
                Some("geolocationError") => {
                    upload.geolocation_error =
                        Some(parse(&field.text().await?, "geolocationError")?);
                }
                other => tracing::debug!(field = ?other, "Ignoring unknown review form field."),
            }
        }
        Ok(upload)
    }

    /// A missing reading is treated like a client without geolocation support.
    pub fn device_location(&self) -> Result<DeviceLocation, UploadError> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Ok(DeviceLocation::Position(Coordinate::new(lat, lng))),
            (Some(_), None) => Err(UploadError::InvalidField("longitude")),
            (None, Some(_)) => Err(UploadError::InvalidField("latitude")),
            (None, None) => Ok(DeviceLocation::Error(
                self.geolocation_error
                    .unwrap_or(GeolocationError::Unsupported),
            )),
        }
    }
}

fn parse<T: FromStr>(value: &str, field: &'static str) -> Result<T, UploadError> {
    value
        .trim()
        .parse()
        .map_err(|_| UploadError::InvalidField(field))
}
