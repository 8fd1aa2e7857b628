use actix_web::web;

pub mod games;
pub mod health;
pub mod jobs;

/// Configure application routes.
///
/// `main.rs` and the test app builder both register through here so the
/// paths the client sees are identical in production and in tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Game session routes: /games/**
    cfg.service(
        web::scope("/games")
            .configure(games::configure_routes)
            .configure(jobs::configure_routes),
    );
}
