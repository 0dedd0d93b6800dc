use actix_web::http::header;
use actix_web::{HttpResponse, Responder, get, post, put, web};

use crate::forms::products::{AddProductForm, UpdateProductForm};
use crate::repository::DieselRepository;
use crate::services::{ServiceError, products};

#[get("/products")]
/// Return the full product catalog as summary views.
pub async fn list_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match products::list_products(repo.get_ref()) {
        Ok(views) => HttpResponse::Ok().json(views),
        Err(err) => {
            log::error!("Failed to list products: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/products/{product_id}")]
/// Return a single product with its reviews, or 404 with no body.
pub async fn get_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = path.into_inner();

    match products::get_product_details(repo.get_ref(), product_id) {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to fetch product {product_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/products")]
/// Create a product. Echoes the posted body back with a Location header
/// pointing at the new resource.
pub async fn add_product(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddProductForm>,
) -> impl Responder {
    let form = form.into_inner();

    match products::create_product(repo.get_ref(), &form) {
        Ok(product) => HttpResponse::Created()
            .insert_header((header::LOCATION, format!("/products/{}", product.id)))
            .json(form),
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(serde_json::json!({ "message": message }))
        }
        Err(err) => {
            log::error!("Failed to create product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[put("/products/{product_id}")]
/// Replace the description and price of a product. Responds 204 with no
/// body on success.
pub async fn update_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<UpdateProductForm>,
) -> impl Responder {
    let product_id = path.into_inner();

    match products::modify_product(repo.get_ref(), product_id, &form) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(serde_json::json!({ "message": message }))
        }
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to update product {product_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
