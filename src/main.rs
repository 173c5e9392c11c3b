use std::env;
use std::sync::Arc;

use dotenvy::dotenv;

use farmstand_orders::application::order_service::OrderService;
use farmstand_orders::infrastructure::order_repo::DieselOrderStore;
use farmstand_orders::infrastructure::webhook::{WebhookConfig, WebhookSink};
use farmstand_orders::{build_server, create_pool, run_migrations};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let webhook_url = env::var("SHEET_WEBHOOK_URL").expect("SHEET_WEBHOOK_URL must be set");
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .expect("PORT must be a valid number");

    let pool = create_pool(&database_url);
    run_migrations(&pool);
    log::info!("Database connected and migrations applied");

    let store = Arc::new(DieselOrderStore::new(pool));
    let sink = Arc::new(WebhookSink::spawn(WebhookConfig { url: webhook_url }));
    let service = OrderService::new(store, sink);

    log::info!("Starting server at http://{}:{}", host, port);

    build_server(service, &host, port)?.await
}
