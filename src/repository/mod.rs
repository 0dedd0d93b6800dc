use crate::db::{DbConnection, DbPool};
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::product_review::{NewProductReview, ProductReview};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod product;
pub mod product_review;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over product records.
pub trait ProductReader {
    /// Fetch a product without its reviews; `Ok(None)` for an absent id.
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    /// Fetch a product together with its reviews in insertion order.
    fn get_product_details_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    /// List every product in insertion order.
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
}

/// Write operations over product records.
pub trait ProductWriter {
    /// Insert a product and return the stored row with its assigned id.
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    /// Overwrite the mutable fields of an existing product.
    fn update_product(
        &self,
        product_id: i32,
        updates: &UpdateProduct,
    ) -> RepositoryResult<Product>;
}

/// Read-only operations over product review records.
pub trait ProductReviewReader {
    fn get_review_by_id(&self, id: i32) -> RepositoryResult<Option<ProductReview>>;
}

/// Write operations over product review records.
pub trait ProductReviewWriter {
    /// Insert a review and return the stored row with its assigned id.
    /// Fails if the referenced product does not exist.
    fn create_review(&self, new_review: &NewProductReview) -> RepositoryResult<ProductReview>;
}
