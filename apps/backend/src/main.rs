use actix_web::{web, App, HttpServer};
use backend::ai::registry;
use backend::ai::CannedWords;
use backend::middleware::cors::cors_middleware;
use backend::middleware::request_trace::RequestTrace;
use backend::routes;
use backend::state::app_state::AppState;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    // Word source is pluggable: the canned fixtures by default, anything
    // from the registry via BACKEND_WORD_SOURCE.
    let source_name =
        std::env::var("BACKEND_WORD_SOURCE").unwrap_or_else(|_| CannedWords::NAME.to_string());
    let factory = match registry::by_name(&source_name) {
        Some(factory) => factory,
        None => {
            eprintln!("❌ Unknown word source: {source_name}");
            std::process::exit(1);
        }
    };

    println!("🎨 Starting Oekaki Shiritori Backend on http://{host}:{port}");
    println!("✅ Word source: {} v{}", factory.name, factory.version);

    let app_state = AppState::new((factory.make)());
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
