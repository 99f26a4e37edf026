use crate::hoodmap::models::PinCategory;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoryFilter {
    #[default]
    All,
    Safe,
    Recommend,
    Caution,
    Avoid,
}

impl CategoryFilter {
    pub fn matches(&self, category: PinCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Safe => category == PinCategory::Safe,
            CategoryFilter::Recommend => category == PinCategory::Recommend,
            CategoryFilter::Caution => category == PinCategory::Caution,
            CategoryFilter::Avoid => category == PinCategory::Avoid,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoryQueryParam {
    #[serde(default)]
    pub category: CategoryFilter,
}
