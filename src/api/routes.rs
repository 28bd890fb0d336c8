// API route configuration

use crate::api::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Health check
        .route("/health", web::get().to(handlers::health_check))
        // Public content API
        .service(
            web::scope("/api")
                .route("/companies", web::get().to(handlers::list_companies))
                .route("/companies/{id}", web::get().to(handlers::get_company))
                .route("/certificates", web::get().to(handlers::list_certificates))
                .route("/certificates/{key}", web::get().to(handlers::get_certificate))
                .route("/brands", web::get().to(handlers::list_brands))
                .route("/brands/{key}", web::get().to(handlers::get_brand))
                .route("/categories", web::get().to(handlers::list_categories))
                // literal segment must precede the {key} catch-all
                .route(
                    "/categories/parents",
                    web::get().to(handlers::list_parent_categories),
                )
                .route("/categories/{key}", web::get().to(handlers::get_category))
                .route("/products", web::get().to(handlers::list_products))
                .route(
                    "/products/recommendations/{exclude_id}",
                    web::get().to(handlers::recommend_products),
                )
                .route("/products/{key}", web::get().to(handlers::get_product))
                .route("/news", web::get().to(handlers::list_news))
                .route(
                    "/news/recommendations/{exclude_id}",
                    web::get().to(handlers::recommend_news),
                )
                .route("/news/{key}", web::get().to(handlers::get_news_item))
                .route("/banners", web::get().to(handlers::list_banners))
                .route("/banners/{key}", web::get().to(handlers::get_banner))
                .route(
                    "/contact_messages",
                    web::post().to(handlers::create_contact_message),
                )
                .route(
                    "/newsletter_subscribers",
                    web::post().to(handlers::create_newsletter_subscriber),
                ),
        );
}
