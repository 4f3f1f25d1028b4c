use actix_web::{middleware, web, App, HttpServer};

use rollcall::handlers::ws::ConnectionRegistry;
use rollcall::{config, db, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    // Ensure data directory exists
    std::fs::create_dir_all("data").expect("Failed to create data directory");

    // Initialize database
    let pool = db::init_pool("data/app.db");
    db::run_migrations(&pool);
    db::seed_roster(&pool);

    let registry = ConnectionRegistry::new();

    log::info!(
        "Starting server at http://127.0.0.1:8080 ({} participants, {} dates)",
        config::SEED_NAMES.len(),
        config::date_count()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(registry.clone()))
            .route(
                "/api/attendance",
                web::get().to(handlers::attendance_handlers::snapshot),
            )
            .route(
                "/api/attendance/toggle",
                web::post().to(handlers::attendance_handlers::toggle),
            )
            .route("/ws", web::get().to(handlers::ws::ws_connect))
            // Static front end (must be registered last — catches "/")
            .service(actix_files::Files::new("/", "./static").index_file("index.html"))
    })
    .bind("127.0.0.1:8080")?
    .run()
    .await
}
