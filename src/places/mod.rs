use crate::places::models::Place;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

pub mod handlers;
pub mod models;
pub mod responses;
#[cfg(test)]
mod tests;

#[derive(Debug, Error)]
pub enum PlaceCatalogError {
    #[error("failed to read the places file: {0}")]
    Io(#[from] io::Error),
    #[error("line {line} of the places file isn't a valid place: {source}")]
    InvalidLine {
        line: usize,
        source: serde_json::Error,
    },
    #[error("place id {0} appears more than once")]
    DuplicateId(u64),
}

/// Reviewable places, fixed for the lifetime of the process.
#[derive(Debug, Default)]
pub struct PlaceCatalog {
    places: Vec<Place>,
}

impl PlaceCatalog {
    pub fn new(places: Vec<Place>) -> Result<Self, PlaceCatalogError> {
        for (index, place) in places.iter().enumerate() {
            if places[..index].iter().any(|other| other.id == place.id) {
                return Err(PlaceCatalogError::DuplicateId(place.id));
            }
        }
        Ok(Self { places })
    }

    /// Reads one JSON-encoded place per line. Blank lines are skipped.
    pub fn from_ndjson<R: BufRead>(reader: R) -> Result<Self, PlaceCatalogError> {
        let mut places = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let place = serde_json::from_str(&line).map_err(|source| {
                PlaceCatalogError::InvalidLine {
                    line: index + 1,
                    source,
                }
            })?;
            places.push(place);
        }
        Self::new(places)
    }

    pub fn load(path: &Path) -> Result<Self, PlaceCatalogError> {
        let file = File::open(path)?;
        Self::from_ndjson(BufReader::new(file))
    }

    pub fn get(&self, place_id: u64) -> Option<&Place> {
        self.places.iter().find(|place| place.id == place_id)
    }

    pub fn all(&self) -> &[Place] {
        &self.places
    }
}
