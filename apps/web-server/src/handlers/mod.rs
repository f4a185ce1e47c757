//! HTTP handlers and route configuration.

mod health;
mod home;
mod posts;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home::home))
        .service(
            web::scope("/posts")
                .route("", web::get().to(posts::index))
                .route("", web::post().to(posts::store))
                // Registered before "/{id}" so "create" is not read as an id.
                .route("/create", web::get().to(posts::create))
                .route("/{id}", web::get().to(posts::show))
                .route("/{id}/edit", web::get().to(posts::edit))
                .route("/{id}", web::put().to(posts::update))
                .route("/{id}", web::patch().to(posts::update))
                .route("/{id}", web::delete().to(posts::destroy)),
        )
        .route("/api/health", web::get().to(health::health_check));
}
