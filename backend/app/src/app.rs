use migration::{Migrator, MigratorTrait};

use crate::{api, config, database, logger, server::Server, service::DeviceRepository};

#[derive(Clone)]
pub struct AppState {
    pub devices: DeviceRepository,
}

impl AppState {
    pub fn new(devices: DeviceRepository) -> Self {
        Self { devices }
    }
}

pub async fn run() -> anyhow::Result<()> {
    let config = config::get();

    logger::init(config.logger());

    tracing::info!("Starting asset dashboard...");

    let db = database::init(config.database()).await?;

    Migrator::up(&db, None).await?;

    let state = AppState::new(DeviceRepository::new(db));

    let server = Server::new(config.server());

    server.start(state, api::create_router()).await?;

    Ok(())
}
