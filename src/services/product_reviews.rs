use serde::Serialize;

use crate::domain::product_review::ProductReview;
use crate::forms::product_reviews::AddProductReviewForm;
use crate::repository::{ProductReviewReader, ProductReviewWriter};
use crate::services::{ServiceError, ServiceResult};

/// Summary projection nested inside a product detail response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductReviewView {
    pub id: i32,
    pub author: String,
    pub rating: i32,
    pub comments: String,
}

impl From<ProductReview> for ProductReviewView {
    fn from(value: ProductReview) -> Self {
        Self {
            id: value.id,
            author: value.author,
            rating: value.rating,
            comments: value.comments,
        }
    }
}

/// Detail projection returned by the review fetch endpoint, exposing the
/// product linkage.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductReviewDetailsView {
    pub id: i32,
    pub author: String,
    pub rating: i32,
    pub comments: String,
    pub product_id: i32,
}

impl From<ProductReview> for ProductReviewDetailsView {
    fn from(value: ProductReview) -> Self {
        Self {
            id: value.id,
            author: value.author,
            rating: value.rating,
            comments: value.comments,
            product_id: value.product_id,
        }
    }
}

/// Fetches a single review by its id.
pub fn get_review<R>(repo: &R, review_id: i32) -> ServiceResult<ProductReviewDetailsView>
where
    R: ProductReviewReader + ?Sized,
{
    let review = repo.get_review_by_id(review_id).map_err(ServiceError::from)?;

    match review {
        Some(review) => Ok(review.into()),
        None => Err(ServiceError::NotFound),
    }
}

/// Attaches a new review to `product_id` and returns the stored entity.
pub fn create_review<R>(
    repo: &R,
    product_id: i32,
    form: &AddProductReviewForm,
) -> ServiceResult<ProductReview>
where
    R: ProductReviewWriter + ?Sized,
{
    let payload = form
        .to_new_review(product_id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_review(&payload).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::repository::mock::{MockProductReviewReader, MockProductReviewWriter};

    fn fixed_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    fn sample_review() -> ProductReview {
        ProductReview {
            id: 5,
            author: "Matheus Souza".to_string(),
            rating: 10,
            comments: "Melhor Havaina que ja usei".to_string(),
            registered_at: fixed_datetime(),
            product_id: 1,
        }
    }

    #[test]
    fn get_review_exposes_product_linkage() {
        let mut repo = MockProductReviewReader::new();
        repo.expect_get_review_by_id()
            .returning(|_| Ok(Some(sample_review())));

        let view = get_review(&repo, 5).expect("lookup should succeed");

        assert_eq!(view.product_id, 1);

        let json = serde_json::to_value(&view).expect("view should serialize");
        assert!(json.get("productId").is_some());
        assert!(json.get("registeredAt").is_none());
    }

    #[test]
    fn get_review_maps_missing_row_to_not_found() {
        let mut repo = MockProductReviewReader::new();
        repo.expect_get_review_by_id().returning(|_| Ok(None));

        let result = get_review(&repo, 42);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn create_review_binds_path_product_id() {
        let mut repo = MockProductReviewWriter::new();
        repo.expect_create_review()
            .withf(|payload| payload.product_id == 1 && payload.rating == 10)
            .returning(|_| Ok(sample_review()));

        let form = AddProductReviewForm {
            author: "Matheus Souza".to_string(),
            rating: 10,
            comments: "Melhor Havaina que ja usei".to_string(),
        };

        let review = create_review(&repo, 1, &form).expect("creation should succeed");
        assert_eq!(review.id, 5);
    }

    #[test]
    fn create_review_rejects_invalid_rating_before_any_write() {
        // No expectation on create_review: a call would panic the mock.
        let repo = MockProductReviewWriter::new();

        let form = AddProductReviewForm {
            author: "Matheus Souza".to_string(),
            rating: 11,
            comments: "Melhor Havaina que ja usei".to_string(),
        };

        let result = create_review(&repo, 1, &form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
