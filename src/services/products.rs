use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::product::Product;
use crate::forms::products::{AddProductForm, UpdateProductForm};
use crate::repository::{ProductReader, ProductWriter};
use crate::services::product_reviews::ProductReviewView;
use crate::services::{ServiceError, ServiceResult};

/// Summary projection returned by the product list endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price: f64,
}

impl From<Product> for ProductView {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            price: value.price,
        }
    }
}

/// Detail projection returned by the product fetch endpoint, including the
/// nested review collection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailsView {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub registered_at: NaiveDateTime,
    pub reviews: Vec<ProductReviewView>,
}

impl From<Product> for ProductDetailsView {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            price: value.price,
            registered_at: value.registered_at,
            reviews: value
                .reviews
                .into_iter()
                .map(ProductReviewView::from)
                .collect(),
        }
    }
}

/// Lists every product as a summary view.
pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<ProductView>>
where
    R: ProductReader + ?Sized,
{
    let products = repo.list_products().map_err(ServiceError::from)?;

    Ok(products.into_iter().map(ProductView::from).collect())
}

/// Fetches a single product with its reviews.
pub fn get_product_details<R>(repo: &R, product_id: i32) -> ServiceResult<ProductDetailsView>
where
    R: ProductReader + ?Sized,
{
    let product = repo
        .get_product_details_by_id(product_id)
        .map_err(ServiceError::from)?;

    match product {
        Some(product) => Ok(product.into()),
        None => Err(ServiceError::NotFound),
    }
}

/// Creates a new product and returns the stored entity with its assigned id.
pub fn create_product<R>(repo: &R, form: &AddProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let payload = form
        .to_new_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_product(&payload).map_err(ServiceError::from)
}

/// Overwrites the description and price of an existing product.
///
/// Validation happens before the repository is touched, so a rejected body
/// never mutates storage.
pub fn modify_product<R>(repo: &R, product_id: i32, form: &UpdateProductForm) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    let updates = form
        .to_update_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_product(product_id, &updates)
        .map_err(ServiceError::from)?;

    Ok(())
}
