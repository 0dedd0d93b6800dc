use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product_review::{
    NewProductReview as DomainNewProductReview, ProductReview as DomainProductReview,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::product_reviews)]
pub struct ProductReview {
    pub id: i32,
    pub author: String,
    pub rating: i32,
    pub comments: String,
    pub registered_at: NaiveDateTime,
    pub product_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_reviews)]
pub struct NewProductReview<'a> {
    pub author: &'a str,
    pub rating: i32,
    pub comments: &'a str,
    pub registered_at: NaiveDateTime,
    pub product_id: i32,
}

impl From<ProductReview> for DomainProductReview {
    fn from(value: ProductReview) -> Self {
        Self {
            id: value.id,
            author: value.author,
            rating: value.rating,
            comments: value.comments,
            registered_at: value.registered_at,
            product_id: value.product_id,
        }
    }
}

impl<'a> From<&'a DomainNewProductReview> for NewProductReview<'a> {
    fn from(value: &'a DomainNewProductReview) -> Self {
        Self {
            author: value.author.as_str(),
            rating: value.rating,
            comments: value.comments.as_str(),
            registered_at: value.registered_at,
            product_id: value.product_id,
        }
    }
}
