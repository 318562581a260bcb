use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use b2b_wholesale::config::ServerConfig;
use b2b_wholesale::db::{establish_connection_pool, run_migrations};
use b2b_wholesale::repository::DieselRepository;
use b2b_wholesale::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env();

    let pool = match establish_connection_pool(&config.database_url, config.pool_size) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_migrations(&pool) {
        log::error!("Failed to prepare database schema: {e}");
        std::process::exit(1);
    }

    let repo = DieselRepository::new(pool);

    log::info!(
        "B2B wholesale service listening on {}:{}",
        config.address,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(routes::json_config())
            .app_data(routes::query_config())
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure)
    })
    .bind((config.address.as_str(), config.port))?
    .run()
    .await
}
