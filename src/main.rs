use std::env;

use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use devreviews::db::establish_connection_pool;
use devreviews::repository::DieselRepository;
use devreviews::routes::product_reviews::{add_product_review, get_product_review};
use devreviews::routes::products::{add_product, get_product, list_products, update_product};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(list_products)
            .service(get_product)
            .service(add_product)
            .service(update_product)
            .service(get_product_review)
            .service(add_product_review)
            .app_data(web::Data::new(repo.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
