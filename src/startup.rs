use std::sync::Arc;

use crate::{
    config::Config,
    error::AppError,
    service::ranking::{GuildScraper, GuildSet, HttpRankingSource, ParallelLookup, FETCH_TIMEOUT},
};

/// Redirect hops followed per ranking request.
const MAX_REDIRECTS: usize = 3;

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for ranking page requests.
///
/// Redirects are capped and connecting may not take longer than a whole fetch is allowed
/// to. The per-request timeout and user-agent are applied by the ranking source.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .connect_timeout(FETCH_TIMEOUT)
        .build()?;

    Ok(client)
}

/// Builds the guild ranking search from configuration.
///
/// # Returns
/// - `Ok(ParallelLookup)` - Lookup over every configured guild
/// - `Err(AppError::ConfigErr)` - `RANKING_BASE_URL` is not a usable base URL
pub fn build_lookup(config: &Config, client: reqwest::Client) -> Result<ParallelLookup, AppError> {
    let source = HttpRankingSource::new(
        client,
        &config.ranking_base_url,
        config.ranking_user_agent.clone(),
        FETCH_TIMEOUT,
    )?;

    let lookup = ParallelLookup::new(
        GuildScraper::new(Arc::new(source)),
        GuildSet::new(config.ranking_guilds.clone()),
    );

    tracing::info!(
        "Tracking {} guild rankings ({} primary)",
        lookup.guilds().len(),
        lookup.guilds().primary().len()
    );

    Ok(lookup)
}
