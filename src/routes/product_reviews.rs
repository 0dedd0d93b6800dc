use actix_web::http::header;
use actix_web::{HttpResponse, Responder, get, post, web};

use crate::forms::product_reviews::AddProductReviewForm;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, product_reviews};

#[get("/products/{product_id}/productreviews/{review_id}")]
/// Return a single review, or 404 with no body. The lookup is by review id
/// alone; the product segment is part of the resource path only.
pub async fn get_product_review(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (_product_id, review_id) = path.into_inner();

    match product_reviews::get_review(repo.get_ref(), review_id) {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to fetch review {review_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/products/{product_id}/productreviews")]
/// Attach a review to a product. Echoes the posted body back with a
/// Location header pointing at the new resource. An unknown product id
/// surfaces as a storage failure, not a validation error.
pub async fn add_product_review(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddProductReviewForm>,
) -> impl Responder {
    let product_id = path.into_inner();
    let form = form.into_inner();

    match product_reviews::create_review(repo.get_ref(), product_id, &form) {
        Ok(review) => HttpResponse::Created()
            .insert_header((
                header::LOCATION,
                format!("/products/{product_id}/productreviews/{}", review.id),
            ))
            .json(form),
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(serde_json::json!({ "message": message }))
        }
        Err(err) => {
            log::error!("Failed to create review for product {product_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
