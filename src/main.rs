use dotenvy::dotenv;
use snafu::ResultExt as _;
use tracing::info;

use ballot::api;
use ballot::config::Config;
use ballot::database::Namespace;
use ballot::error::{ApplicationError, BindAddressSnafu, ConnectDatabaseSnafu, WebServerSnafu};
use ballot::logger;
use ballot::service::vote::VoteService;

#[tokio::main]
async fn main() -> Result<(), ApplicationError> {
    dotenv().ok();

    let config = Config::from_env()?;
    let _guard = logger::init(&config)?;

    let database = config.database().await.context(ConnectDatabaseSnafu)?;
    let service = VoteService::new(database.votes(Namespace::Primary));

    let listener = tokio::net::TcpListener::bind(config.host)
        .await
        .context(BindAddressSnafu {
            address: config.host,
        })?;
    info!(address = %config.host, "vote record service listening");

    axum::serve(listener, api::create_router(service))
        .await
        .context(WebServerSnafu)
}
