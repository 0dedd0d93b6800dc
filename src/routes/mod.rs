pub mod product_reviews;
pub mod products;
