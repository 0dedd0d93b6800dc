use mockall::mock;

use super::{ProductReader, ProductReviewReader, ProductReviewWriter, ProductWriter};
use crate::domain::{
    product::{NewProduct, Product, UpdateProduct},
    product_review::{NewProductReview, ProductReview},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn get_product_details_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
    }
}

mock! {
    pub ProductReviewReader {}

    impl ProductReviewReader for ProductReviewReader {
        fn get_review_by_id(&self, id: i32) -> RepositoryResult<Option<ProductReview>>;
    }
}

mock! {
    pub ProductReviewWriter {}

    impl ProductReviewWriter for ProductReviewWriter {
        fn create_review(&self, new_review: &NewProductReview) -> RepositoryResult<ProductReview>;
    }
}
