use crate::geo::models::Coordinate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: u64,
    pub name: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
}
