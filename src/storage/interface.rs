use crate::reviews::models::Review;
use std::future::Future;
use uuid::Uuid;

pub trait IReviewStorage: Clone + Send + Sync + 'static {
    fn insert(&self, review: Review) -> impl Future<Output = Uuid> + Send;

    /// Reviews of the place, oldest first.
    fn by_place(&self, place_id: u64) -> impl Future<Output = Vec<Review>> + Send;

    fn preview(&self, review_id: Uuid) -> impl Future<Output = Option<Vec<u8>>> + Send;
}
