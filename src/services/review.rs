use super::error::ReviewError;
use super::store::ReviewStore;
use crate::forms;
use crate::models;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Rate stored when a client supplies none (or an unparseable one).
pub const DEFAULT_RATE: i32 = 5;

pub struct ReviewPage {
    pub reviews: Vec<models::Review>,
    pub total: i64,
}

/// The rating-consistency and query engine. Every mutation recomputes the
/// owning product's aggregate rating from the live review set before the
/// operation returns; the mutation and its recomputation are one unit of
/// work and a store failure in either fails the whole operation.
///
/// Recompute is read-then-write: without `serialize_product_updates`,
/// concurrent mutations against the same product are last-writer-wins on
/// the aggregate and settle once no mutation is in flight.
pub struct ReviewService {
    store: Arc<dyn ReviewStore>,
    default_page_size: i64,
    serialize_product_updates: bool,
    product_locks: Mutex<HashMap<i32, Arc<Mutex<()>>>>,
}

impl ReviewService {
    pub fn new(
        store: Arc<dyn ReviewStore>,
        default_page_size: i64,
        serialize_product_updates: bool,
    ) -> Self {
        Self {
            store,
            default_page_size,
            serialize_product_updates,
            product_locks: Mutex::new(HashMap::new()),
        }
    }

    fn page_window(&self, page: Option<i64>, limit: Option<i64>) -> (i64, i64) {
        let page = page.filter(|page| *page > 0).unwrap_or(1);
        let limit = limit
            .filter(|limit| *limit > 0)
            .unwrap_or(self.default_page_size);
        (page, limit)
    }

    /// Newest-first listing over all reviews. A search narrows the full
    /// in-memory set before pagination, so the reported total and the page
    /// offsets both refer to the narrowed set, not the unfiltered count.
    #[tracing::instrument(name = "List reviews.", skip(self))]
    pub async fn list(
        &self,
        page: Option<i64>,
        limit: Option<i64>,
        q: Option<&str>,
    ) -> Result<ReviewPage, ReviewError> {
        let (page, limit) = self.page_window(page, limit);

        let mut reviews = self.store.fetch_all().await.map_err(ReviewError::Store)?;
        let mut total = self.store.count().await.map_err(ReviewError::Store)?;

        if let Some(q) = q.map(str::to_lowercase).filter(|q| !q.is_empty()) {
            reviews.retain(|review| {
                review.title.to_lowercase().contains(&q)
                    || review.description.to_lowercase().contains(&q)
            });
            total = reviews.len() as i64;
        }

        let offset = ((page - 1) * limit) as usize;
        let reviews = reviews
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .collect();

        Ok(ReviewPage { reviews, total })
    }

    /// Newest-first page of one product's reviews, paginated store-side.
    /// `total` is the unfiltered per-product count. A valid product with no
    /// reviews is surfaced as a failure, not an empty success.
    #[tracing::instrument(name = "List reviews by product.", skip(self))]
    pub async fn list_by_product(
        &self,
        product_id: i32,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<ReviewPage, ReviewError> {
        let (page, limit) = self.page_window(page, limit);

        self.store
            .fetch_product(product_id)
            .await
            .map_err(ReviewError::Store)?
            .ok_or_else(|| ReviewError::NotFound(format!("product {}", product_id)))?;

        let total = self
            .store
            .count_by_product(product_id)
            .await
            .map_err(ReviewError::Store)?;
        let reviews = self
            .store
            .fetch_by_product(product_id, (page - 1) * limit, limit)
            .await
            .map_err(ReviewError::Store)?;

        if reviews.is_empty() || total == 0 {
            return Err(ReviewError::EmptyResult);
        }

        Ok(ReviewPage { reviews, total })
    }

    #[tracing::instrument(name = "Create review.", skip(self, user))]
    pub async fn create(
        &self,
        product_id: i32,
        form: forms::review::Add,
        user: &models::User,
    ) -> Result<models::Review, ReviewError> {
        if form.title.trim().is_empty() || form.description.trim().is_empty() {
            return Err(ReviewError::InvalidInput(
                "title and description are required".to_string(),
            ));
        }

        self.store
            .fetch_product(product_id)
            .await
            .map_err(ReviewError::Store)?
            .ok_or_else(|| ReviewError::NotFound(format!("product {}", product_id)))?;

        let _guard = self.product_guard(product_id).await;

        let review = models::Review {
            rate: form.rate.unwrap_or(DEFAULT_RATE),
            title: form.title,
            description: form.description,
            product_id,
            user_id: user.id.clone(),
            user_name: user.display_name(),
            ..Default::default()
        };
        let review = self
            .store
            .insert(review)
            .await
            .map_err(ReviewError::Store)?;

        self.recompute_product_rate(product_id).await?;

        Ok(review)
    }

    /// Author-only, regardless of role. Recomputation runs only when the
    /// rate itself changes.
    #[tracing::instrument(name = "Update review.", skip(self, user))]
    pub async fn update(
        &self,
        review_id: i32,
        form: forms::review::Edit,
        user: &models::User,
    ) -> Result<models::Review, ReviewError> {
        let mut review = self
            .store
            .fetch(review_id)
            .await
            .map_err(ReviewError::Store)?
            .ok_or_else(|| ReviewError::NotFound(format!("review {}", review_id)))?;

        if review.user_id != user.id {
            return Err(ReviewError::Forbidden(
                "only the author may edit a review".to_string(),
            ));
        }

        let rate_changed = form.rate.is_some();
        form.apply(&mut review);
        let product_id = review.product_id;

        let _guard = if rate_changed {
            self.product_guard(product_id).await
        } else {
            None
        };

        let review = self
            .store
            .update(review)
            .await
            .map_err(ReviewError::Store)?;

        if rate_changed {
            self.recompute_product_rate(product_id).await?;
        }

        Ok(review)
    }

    /// Allowed for the author and for any elevated role.
    #[tracing::instrument(name = "Delete review.", skip(self, user))]
    pub async fn delete(&self, review_id: i32, user: &models::User) -> Result<(), ReviewError> {
        let review = self
            .store
            .fetch(review_id)
            .await
            .map_err(ReviewError::Store)?
            .ok_or_else(|| ReviewError::NotFound(format!("review {}", review_id)))?;

        if !user.is_elevated() && review.user_id != user.id {
            return Err(ReviewError::Forbidden(
                "only the author or an elevated role may delete a review".to_string(),
            ));
        }

        let _guard = self.product_guard(review.product_id).await;

        let removed = self
            .store
            .delete(review_id)
            .await
            .map_err(ReviewError::Store)?;
        if !removed {
            return Err(ReviewError::NotFound(format!("review {}", review_id)));
        }

        self.recompute_product_rate(review.product_id).await?;

        Ok(())
    }

    /// Recomputes the aggregate from scratch over the product's full review
    /// set and overwrites it. O(n) per mutation; an empty set yields 0.
    #[tracing::instrument(name = "Recompute product rating.", skip(self))]
    async fn recompute_product_rate(&self, product_id: i32) -> Result<(), ReviewError> {
        let reviews = self
            .store
            .fetch_all_by_product(product_id)
            .await
            .map_err(ReviewError::Store)?;

        let rate = if reviews.is_empty() {
            0.0
        } else {
            reviews.iter().map(|review| review.rate as f64).sum::<f64>() / reviews.len() as f64
        };

        self.store
            .set_product_rate(product_id, rate)
            .await
            .map_err(ReviewError::Store)
    }

    async fn product_guard(&self, product_id: i32) -> Option<OwnedMutexGuard<()>> {
        if !self.serialize_product_updates {
            return None;
        }

        let lock = {
            let mut locks = self.product_locks.lock().await;
            locks.entry(product_id).or_default().clone()
        };
        Some(lock.lock_owned().await)
    }
}
