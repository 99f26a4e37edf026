use crate::reviews::models::Review;
use crate::storage::interface::IReviewStorage;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Reviews {
    by_id: HashMap<Uuid, Review>,
    /// Review ids per place, in insertion order.
    by_place: HashMap<u64, Vec<Uuid>>,
}

#[derive(Clone, Default)]
pub struct HashMapReviewStorage {
    storage: Arc<RwLock<Reviews>>,
}

impl IReviewStorage for HashMapReviewStorage {
    async fn insert(&self, review: Review) -> Uuid {
        let review_id = review.id;
        let place_id = review.place_id;
        let mut storage = self.storage.write().await;
        if storage.by_id.insert(review_id, review).is_none() {
            storage
                .by_place
                .entry(place_id)
                .or_default()
                .push(review_id);
        }
        review_id
    }

    async fn by_place(&self, place_id: u64) -> Vec<Review> {
        let storage = self.storage.read().await;
        storage
            .by_place
            .get(&place_id)
            .into_iter()
            .flatten()
            .filter_map(|review_id| storage.by_id.get(review_id))
            .cloned()
            .collect()
    }

    async fn preview(&self, review_id: Uuid) -> Option<Vec<u8>> {
        self.storage
            .read()
            .await
            .by_id
            .get(&review_id)
            .map(|review| review.preview.clone())
    }
}
