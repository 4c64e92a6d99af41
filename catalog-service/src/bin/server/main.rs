use std::sync::Arc;

use auth::TokenIssuer;
use catalog_service::category::ports::CategoryRepository;
use catalog_service::category::ports::CategoryServicePort;
use catalog_service::category::service::CategoryService;
use catalog_service::config::Config;
use catalog_service::domain::user::ports::AuthServicePort;
use catalog_service::domain::user::ports::UserRepository;
use catalog_service::domain::user::service::AuthService;
use catalog_service::inbound::http::router::create_router;
use catalog_service::outbound::repositories::InMemoryCategoryRepository;
use catalog_service::outbound::repositories::InMemoryProductRepository;
use catalog_service::outbound::repositories::InMemoryUserRepository;
use catalog_service::outbound::repositories::PostgresCategoryRepository;
use catalog_service::outbound::repositories::PostgresProductRepository;
use catalog_service::outbound::repositories::PostgresUserRepository;
use catalog_service::product::ports::ProductRepository;
use catalog_service::product::ports::ProductServicePort;
use catalog_service::product::service::ProductService;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

type Services = (
    Arc<dyn AuthServicePort>,
    Arc<dyn ProductServicePort>,
    Arc<dyn CategoryServicePort>,
);

fn wire_services<UR, PR, CR>(
    users: Arc<UR>,
    products: Arc<PR>,
    categories: Arc<CR>,
    token_issuer: Arc<TokenIssuer>,
) -> Services
where
    UR: UserRepository,
    PR: ProductRepository,
    CR: CategoryRepository,
{
    let auth_service: Arc<dyn AuthServicePort> = Arc::new(AuthService::new(users, token_issuer));
    let product_service: Arc<dyn ProductServicePort> = Arc::new(ProductService::new(
        Arc::clone(&products),
        Arc::clone(&categories),
    ));
    let category_service: Arc<dyn CategoryServicePort> =
        Arc::new(CategoryService::new(categories, products));

    (auth_service, product_service, category_service)
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "catalog-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_expiration_hours = config.jwt.expiration_hours,
        persistence = if config.database.is_some() { "postgresql" } else { "memory" },
        "Configuration loaded"
    );

    let token_issuer = Arc::new(config.jwt.token_issuer()?);

    let (auth_service, product_service, category_service) = match &config.database {
        Some(database) => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(database.max_connections)
                .connect(&database.url)
                .await?;
            tracing::info!(
                max_connections = database.max_connections,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            wire_services(
                Arc::new(PostgresUserRepository::new(pg_pool.clone())),
                Arc::new(PostgresProductRepository::new(pg_pool.clone())),
                Arc::new(PostgresCategoryRepository::new(pg_pool)),
                Arc::clone(&token_issuer),
            )
        }
        None => {
            tracing::warn!("No database configured, records are kept in memory");

            wire_services(
                Arc::new(InMemoryUserRepository::new()),
                Arc::new(InMemoryProductRepository::new()),
                Arc::new(InMemoryCategoryRepository::new()),
                Arc::clone(&token_issuer),
            )
        }
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        auth_service,
        product_service,
        category_service,
        token_issuer,
    );

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
