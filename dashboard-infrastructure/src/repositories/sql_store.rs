use std::str::FromStr;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::any::{install_default_drivers, AnyConnectOptions};
use sqlx::mysql::MySqlConnectOptions;
use sqlx::{AnyConnection, ConnectOptions, Connection};
use tracing::{debug, warn};

use dashboard_domain::{
    AccountFlag, DbConfig, GuildConfigRepository, GuildConfigUpdate, PlayerStats,
    ReportRepository, TrendPoint,
};

use crate::utils::{parse_date, to_count};

const TOTAL_PLAYERS_SQL: &str = "SELECT COUNT(*) FROM players";

// CAST keeps the day textual on every backend so it decodes as a string.
const TREND_SQL: &str = "SELECT CAST(DATE(timestamp) AS CHAR) AS event_date, COUNT(*) AS event_count \
FROM player_history \
WHERE timestamp IS NOT NULL \
GROUP BY event_date \
ORDER BY event_date ASC";

const UPDATE_SERVER_NAME_SQL: &str = "UPDATE guild_configs SET server_name = ? WHERE guild_id = ?";

/// Relational store gateway. Every operation opens its own connection and
/// closes it before returning; nothing is pooled or cached between calls.
#[derive(Clone)]
pub struct SqlStore {
    options: AnyConnectOptions,
}

impl SqlStore {
    pub fn new(config: &DbConfig) -> Result<Self> {
        install_default_drivers();
        let options = match config.database_url.as_deref() {
            Some(url) => AnyConnectOptions::from_str(url).context("invalid database_url")?,
            None => {
                let mut mysql = MySqlConnectOptions::new().port(config.port);
                if let Some(host) = &config.host {
                    mysql = mysql.host(host);
                }
                if let Some(user) = &config.user {
                    mysql = mysql.username(user);
                }
                if let Some(password) = &config.password {
                    mysql = mysql.password(password);
                }
                if let Some(database) = &config.database {
                    mysql = mysql.database(database);
                }
                AnyConnectOptions::from_url(&mysql.to_url_lossy())
                    .context("invalid mysql connection settings")?
            }
        };
        Ok(Self { options })
    }

    async fn connect(&self) -> Result<AnyConnection> {
        let conn = self
            .options
            .connect()
            .await
            .context("failed to connect to data store")?;
        debug!("data store connection opened");
        Ok(conn)
    }
}

async fn release(conn: AnyConnection) {
    if let Err(err) = conn.close().await {
        warn!("failed to close data store connection: {}", err);
    }
}

async fn query_stats(conn: &mut AnyConnection) -> Result<PlayerStats> {
    let total: i64 = sqlx::query_scalar(TOTAL_PLAYERS_SQL)
        .fetch_one(&mut *conn)
        .await
        .context("failed to count players")?;
    let mut stats = PlayerStats {
        total_players: to_count(total),
        ..PlayerStats::default()
    };
    for flag in AccountFlag::ALL {
        let sql = format!(
            "SELECT COUNT(*) FROM players WHERE {} = TRUE",
            flag.column()
        );
        let count: i64 = sqlx::query_scalar(&sql)
            .fetch_one(&mut *conn)
            .await
            .with_context(|| format!("failed to count players by {}", flag.column()))?;
        stats.set_flag_count(flag, to_count(count));
    }
    Ok(stats)
}

async fn query_trend(conn: &mut AnyConnection) -> Result<Vec<TrendPoint>> {
    let rows: Vec<(String, i64)> = sqlx::query_as(TREND_SQL)
        .fetch_all(&mut *conn)
        .await
        .context("failed to fetch player history trend")?;
    rows.into_iter()
        .map(|(event_date, event_count)| -> Result<TrendPoint> {
            Ok(TrendPoint {
                date: parse_date(&event_date)?,
                count: to_count(event_count),
            })
        })
        .collect()
}

async fn execute_update(conn: &mut AnyConnection, update: &GuildConfigUpdate) -> Result<u64> {
    let result = sqlx::query(UPDATE_SERVER_NAME_SQL)
        .bind(update.server_name.clone())
        .bind(update.guild_id.as_str().to_string())
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected())
}

#[async_trait]
impl ReportRepository for SqlStore {
    async fn fetch_stats(&self) -> anyhow::Result<PlayerStats> {
        let mut conn = self.connect().await?;
        let result = query_stats(&mut conn).await;
        release(conn).await;
        result
    }

    async fn fetch_trend(&self) -> anyhow::Result<Vec<TrendPoint>> {
        let mut conn = self.connect().await?;
        let result = query_trend(&mut conn).await;
        release(conn).await;
        result
    }

    async fn ping(&self) -> anyhow::Result<()> {
        let mut conn = self.connect().await?;
        let result = conn.ping().await.context("data store ping failed");
        release(conn).await;
        result
    }
}

#[async_trait]
impl GuildConfigRepository for SqlStore {
    async fn update_server_name(&self, update: &GuildConfigUpdate) -> anyhow::Result<u64> {
        let mut conn = self.connect().await?;
        let result = execute_update(&mut conn, update).await;
        release(conn).await;
        result
    }
}

#[cfg(test)]
mod tests {
    use dashboard_domain::GuildId;
    use tempfile::TempDir;

    use super::*;

    const SCHEMA: [&str; 3] = [
        "CREATE TABLE players (\
            id INTEGER PRIMARY KEY, \
            alt_flag BOOLEAN NOT NULL DEFAULT 0, \
            watchlisted BOOLEAN NOT NULL DEFAULT 0, \
            whitelist BOOLEAN NOT NULL DEFAULT 0)",
        "CREATE TABLE player_history (\
            id INTEGER PRIMARY KEY, \
            player_id INTEGER, \
            timestamp TEXT)",
        "CREATE TABLE guild_configs (\
            guild_id TEXT PRIMARY KEY, \
            server_name TEXT NOT NULL)",
    ];

    fn sqlite_config(url: String) -> DbConfig {
        DbConfig {
            host: None,
            port: 3306,
            user: None,
            password: None,
            database: None,
            database_url: Some(url),
        }
    }

    async fn store_with_schema() -> (TempDir, SqlStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let url = format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("dashboard.db").display()
        );
        let store = SqlStore::new(&sqlite_config(url)).expect("store");
        run(&store, &SCHEMA).await;
        (dir, store)
    }

    async fn run(store: &SqlStore, statements: &[&str]) {
        let mut conn = store.connect().await.expect("connect");
        for statement in statements {
            sqlx::query(statement)
                .execute(&mut conn)
                .await
                .expect("execute statement");
        }
        release(conn).await;
    }

    async fn guild_rows(store: &SqlStore) -> Vec<(String, String)> {
        let mut conn = store.connect().await.expect("connect");
        let rows = sqlx::query_as("SELECT guild_id, server_name FROM guild_configs ORDER BY guild_id")
            .fetch_all(&mut conn)
            .await
            .expect("select guild configs");
        release(conn).await;
        rows
    }

    fn update(guild_id: &str, server_name: &str) -> GuildConfigUpdate {
        GuildConfigUpdate {
            guild_id: GuildId(guild_id.to_string()),
            server_name: server_name.to_string(),
        }
    }

    #[tokio::test]
    async fn empty_players_table_counts_zero() {
        let (_dir, store) = store_with_schema().await;
        let stats = store.fetch_stats().await.expect("stats");
        assert_eq!(stats, PlayerStats::default());
    }

    #[tokio::test]
    async fn flag_counts_are_independent() {
        let (_dir, store) = store_with_schema().await;
        run(
            &store,
            &[
                "INSERT INTO players (id, alt_flag, watchlisted, whitelist) VALUES (1, 1, 0, 0)",
                "INSERT INTO players (id, alt_flag, watchlisted, whitelist) VALUES (2, 1, 1, 0)",
                "INSERT INTO players (id, alt_flag, watchlisted, whitelist) VALUES (3, 0, 1, 1)",
                "INSERT INTO players (id, alt_flag, watchlisted, whitelist) VALUES (4, 0, 0, 0)",
                "INSERT INTO players (id, alt_flag, watchlisted, whitelist) VALUES (5, 1, 1, 1)",
            ],
        )
        .await;

        let stats = store.fetch_stats().await.expect("stats");
        assert_eq!(
            stats,
            PlayerStats {
                total_players: 5,
                flagged_accounts: 3,
                watchlisted_accounts: 3,
                whitelisted_accounts: 2,
            }
        );
    }

    #[tokio::test]
    async fn empty_history_yields_empty_trend() {
        let (_dir, store) = store_with_schema().await;
        let trend = store.fetch_trend().await.expect("trend");
        assert!(trend.is_empty());
    }

    #[tokio::test]
    async fn trend_groups_by_day_ascending() {
        let (_dir, store) = store_with_schema().await;
        run(
            &store,
            &[
                "INSERT INTO player_history (player_id, timestamp) VALUES (1, '2024-01-02 10:00:00')",
                "INSERT INTO player_history (player_id, timestamp) VALUES (2, '2024-01-01 09:00:00')",
                "INSERT INTO player_history (player_id, timestamp) VALUES (3, '2024-01-02 23:59:59')",
                "INSERT INTO player_history (player_id, timestamp) VALUES (1, '2024-01-03 00:00:00')",
                "INSERT INTO player_history (player_id, timestamp) VALUES (2, '2024-01-01 12:00:00')",
                "INSERT INTO player_history (player_id, timestamp) VALUES (3, '2024-01-01 13:30:00')",
            ],
        )
        .await;

        let trend = store.fetch_trend().await.expect("trend");
        let rows: Vec<(String, u64)> = trend
            .iter()
            .map(|point| (point.date.to_string(), point.count))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("2024-01-01".to_string(), 3),
                ("2024-01-02".to_string(), 2),
                ("2024-01-03".to_string(), 1),
            ]
        );
    }

    #[tokio::test]
    async fn update_touches_only_the_keyed_row() {
        let (_dir, store) = store_with_schema().await;
        run(
            &store,
            &[
                "INSERT INTO guild_configs (guild_id, server_name) VALUES ('100', 'Old A')",
                "INSERT INTO guild_configs (guild_id, server_name) VALUES ('200', 'Old B')",
            ],
        )
        .await;

        let rows = store
            .update_server_name(&update("100", "New A"))
            .await
            .expect("update");
        assert_eq!(rows, 1);
        assert_eq!(
            guild_rows(&store).await,
            vec![
                ("100".to_string(), "New A".to_string()),
                ("200".to_string(), "Old B".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn update_of_unknown_guild_affects_nothing() {
        let (_dir, store) = store_with_schema().await;
        run(
            &store,
            &["INSERT INTO guild_configs (guild_id, server_name) VALUES ('100', 'Old A')"],
        )
        .await;

        let rows = store
            .update_server_name(&update("999", "Ghost"))
            .await
            .expect("zero-row update is not an error");
        assert_eq!(rows, 0);
        assert_eq!(
            guild_rows(&store).await,
            vec![("100".to_string(), "Old A".to_string())]
        );
    }

    #[tokio::test]
    async fn update_without_table_reports_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("bare.db").display());
        let store = SqlStore::new(&sqlite_config(url)).expect("store");

        let err = store
            .update_server_name(&update("1", "Name"))
            .await
            .expect_err("missing table");
        assert!(format!("{:#}", err).contains("guild_configs"));
    }

    #[tokio::test]
    async fn unreachable_store_propagates_read_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let url = format!(
            "sqlite://{}?mode=ro",
            dir.path().join("missing").join("absent.db").display()
        );
        let store = SqlStore::new(&sqlite_config(url)).expect("store");

        assert!(store.fetch_stats().await.is_err());
        assert!(store.fetch_trend().await.is_err());
        assert!(store.ping().await.is_err());
    }

    #[tokio::test]
    async fn ping_succeeds_against_live_store() {
        let (_dir, store) = store_with_schema().await;
        store.ping().await.expect("ping");
    }

    #[test]
    fn discrete_settings_build_mysql_options() {
        let config = DbConfig {
            host: Some("db.internal".to_string()),
            port: 3307,
            user: Some("dashboard".to_string()),
            password: Some("p@ss word".to_string()),
            database: Some("alts".to_string()),
            database_url: None,
        };
        let store = SqlStore::new(&config).expect("mysql options");
        let url = store.options.to_url_lossy().to_string();
        assert!(url.starts_with("mysql://dashboard"));
        assert!(url.contains("@db.internal:3307/alts"));
        assert!(!url.contains("p@ss word"));
    }
}
