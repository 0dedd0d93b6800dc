use devreviews::forms::products::{AddProductForm, UpdateProductForm};
use devreviews::repository::{DieselRepository, ProductReader};
use devreviews::services::{ServiceError, products};

mod common;

fn chinelo_form() -> AddProductForm {
    AddProductForm {
        title: "Chinelo".to_string(),
        description: "Um chinelo da marca Havaiana".to_string(),
        price: 50.0,
    }
}

#[test]
fn create_product_then_fetch_details() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let product = products::create_product(&repo, &chinelo_form()).expect("creation should succeed");
    assert!(product.id > 0);

    let details =
        products::get_product_details(&repo, product.id).expect("details should be found");
    assert_eq!(details.title, "Chinelo");
    assert_eq!(details.description, "Um chinelo da marca Havaiana");
    assert_eq!(details.price, 50.0);
    assert!(details.reviews.is_empty());
}

#[test]
fn list_products_on_empty_store_is_empty() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let views = products::list_products(&repo).expect("listing should succeed");
    assert!(views.is_empty());
}

#[test]
fn modify_product_accepts_description_at_the_limit() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let product = products::create_product(&repo, &chinelo_form()).expect("creation should succeed");

    let description = "a".repeat(50);
    let form = UpdateProductForm {
        description: description.clone(),
        price: 45.0,
    };
    products::modify_product(&repo, product.id, &form).expect("update should succeed");

    let stored = repo
        .get_product_by_id(product.id)
        .unwrap()
        .expect("product should exist");
    assert_eq!(stored.description, description);
    assert_eq!(stored.price, 45.0);
}

#[test]
fn modify_product_rejects_long_description_and_leaves_row_unchanged() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let product = products::create_product(&repo, &chinelo_form()).expect("creation should succeed");

    let form = UpdateProductForm {
        description: "a".repeat(51),
        price: 1.0,
    };
    let result = products::modify_product(&repo, product.id, &form);
    assert!(matches!(result, Err(ServiceError::Form(_))));

    let stored = repo
        .get_product_by_id(product.id)
        .unwrap()
        .expect("product should exist");
    assert_eq!(stored.description, "Um chinelo da marca Havaiana");
    assert_eq!(stored.price, 50.0);
}

#[test]
fn modify_unknown_product_is_not_found() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let form = UpdateProductForm {
        description: "Novo".to_string(),
        price: 10.0,
    };
    let result = products::modify_product(&repo, 42, &form);
    assert!(matches!(result, Err(ServiceError::NotFound)));
}

#[test]
fn get_unknown_product_details_is_not_found() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let result = products::get_product_details(&repo, 42);
    assert!(matches!(result, Err(ServiceError::NotFound)));
}
