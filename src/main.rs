use std::sync::Arc;

use clap::Parser;
use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;

use tactical_backend::api::{AuthApi, HealthApi};
use tactical_backend::cli::{self, Cli, Commands};
use tactical_backend::config::{
    init_database, init_logging, migrate_directory_database, BootstrapSettings, SystemEnvironment,
};
use tactical_backend::AppData;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging(&SystemEnvironment)?;

    let cli = Cli::parse();

    let bootstrap_settings = BootstrapSettings::from_env()?;
    tracing::debug!("Loaded bootstrap settings: {:?}", bootstrap_settings);

    let db = init_database(&bootstrap_settings).await?;

    let command = cli.command.unwrap_or(Commands::Serve);
    if command != Commands::Serve {
        return cli::execute_command(command, db).await;
    }

    migrate_directory_database(&db).await?;

    let app_data = Arc::new(AppData::init(db));

    let address = bootstrap_settings.server_address();
    let api_service = OpenApiService::new(
        (HealthApi, AuthApi::new(app_data.clone())),
        "Tactical Dashboard API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("http://{}/api", address));

    let ui = api_service.swagger_ui();

    // API under /api, Swagger UI under /swagger
    let app = Route::new()
        .nest("/api", api_service)
        .nest("/swagger", ui);

    tracing::info!("Starting server on http://{}", address);
    tracing::info!("Swagger UI available at http://{}/swagger", address);

    Server::new(TcpListener::bind(address))
        .run(app)
        .await?;

    Ok(())
}
