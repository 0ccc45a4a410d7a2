use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::{config::Config, error::Error};

/// Connect to the database and run migrations
///
/// The returned connection pool is the context every data-access function
/// takes explicitly; there is no ambient database handle. Pass it to
/// [`close_database`] during shutdown.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);
    if let Some(max_connections) = config.max_connections {
        opt.max_connections(max_connections);
    }

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;
    info!("database connected, migrations applied");

    Ok(db)
}

/// Close the connection pool opened by [`connect_to_database`].
pub async fn close_database(db: DatabaseConnection) -> Result<(), Error> {
    db.close().await?;
    info!("database connection closed");

    Ok(())
}
