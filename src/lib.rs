pub mod application;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::order_service::OrderService;
pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::orders::create_order,
        handlers::orders::list_orders,
        handlers::orders::update_order_status,
        handlers::orders::delete_order,
    ),
    components(schemas(
        handlers::orders::CreateOrderRequest,
        handlers::orders::CreateLineItemRequest,
        handlers::orders::UpdateStatusRequest,
        handlers::orders::OrderResponse,
        handlers::orders::LineItemResponse,
        handlers::orders::CreateOrderResponse,
        handlers::orders::UpdateStatusResponse,
        handlers::orders::DeleteOrderResponse,
    )),
    tags((name = "orders", description = "Order lifecycle endpoints"))
)]
pub struct ApiDoc;

/// Route table plus the shared service, separated out so tests can mount the
/// same application against in-memory doubles.
pub fn app_config(service: OrderService) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(service))
            .route("/", web::get().to(handlers::orders::health))
            .service(
                web::scope("/api")
                    .route("/orders", web::post().to(handlers::orders::create_order))
                    .service(
                        web::scope("/admin")
                            .route("/orders", web::get().to(handlers::orders::list_orders))
                            .route(
                                "/orders/{id}/status",
                                web::put().to(handlers::orders::update_order_status),
                            )
                            .route(
                                "/orders/{id}",
                                web::delete().to(handlers::orders::delete_order),
                            ),
                    ),
            );
    }
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    service: OrderService,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .configure(app_config(service.clone()))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
