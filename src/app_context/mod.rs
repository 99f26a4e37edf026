use crate::cli::Args;
use crate::credentials::partner::PartnerApiError;
use crate::credentials::CredentialService;
use crate::places::{PlaceCatalog, PlaceCatalogError};
use crate::proximity::policy::VerificationPolicy;
use crate::storage::interface::IReviewStorage;
use crate::storage::reviews::HashMapReviewStorage;
use std::sync::Arc;
use thiserror::Error;

#[derive(Clone)]
pub struct AppContext<RS: IReviewStorage> {
    pub places: Arc<PlaceCatalog>,
    pub reviews: RS,
    pub policy: VerificationPolicy,
    pub credentials: CredentialService,
}

#[derive(Debug, Error)]
pub enum InitError {
    #[error(transparent)]
    Places(#[from] PlaceCatalogError),
    #[error(transparent)]
    Partner(#[from] PartnerApiError),
}

pub fn init(args: &Args) -> Result<AppContext<HashMapReviewStorage>, InitError> {
    let credentials = CredentialService::from_args(args)?;
    with_credentials(args, credentials)
}

pub fn with_credentials(
    args: &Args,
    credentials: CredentialService,
) -> Result<AppContext<HashMapReviewStorage>, InitError> {
    let places = PlaceCatalog::load(&args.places)?;
    tracing::info!(
        places = places.all().len(),
        path = %args.places.display(),
        "Loaded the place catalog."
    );
    Ok(AppContext {
        places: Arc::new(places),
        reviews: HashMapReviewStorage::default(),
        policy: VerificationPolicy::from_args(args),
        credentials,
    })
}
