use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    Female,
    Male,
    /// Any other self-declared value. It is refused like `male`.
    #[serde(other)]
    Other,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenderSelection {
    pub gender: Gender,
}
