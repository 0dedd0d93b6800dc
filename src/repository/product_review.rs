use diesel::prelude::*;

use crate::{
    domain::product_review::{
        NewProductReview as DomainNewProductReview, ProductReview as DomainProductReview,
    },
    models::product_review::{
        NewProductReview as DbNewProductReview, ProductReview as DbProductReview,
    },
    repository::errors::RepositoryResult,
    repository::{DieselRepository, ProductReviewReader, ProductReviewWriter},
};

impl ProductReviewReader for DieselRepository {
    fn get_review_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProductReview>> {
        use crate::schema::product_reviews;

        let mut conn = self.conn()?;
        let review = product_reviews::table
            .find(id)
            .first::<DbProductReview>(&mut conn)
            .optional()?;

        Ok(review.map(Into::into))
    }
}

impl ProductReviewWriter for DieselRepository {
    fn create_review(
        &self,
        new_review: &DomainNewProductReview,
    ) -> RepositoryResult<DomainProductReview> {
        use crate::schema::product_reviews;

        let mut conn = self.conn()?;
        let db_new = DbNewProductReview::from(new_review);

        // A dangling product_id trips the foreign key here and propagates
        // as a database error.
        let created = diesel::insert_into(product_reviews::table)
            .values(&db_new)
            .get_result::<DbProductReview>(&mut conn)?;

        Ok(created.into())
    }
}
