//! MySQL implementation of the database gateway
//!
//! Every procedure call acquires a pooled connection through a transaction,
//! which is committed or rolled back before the connection goes back to the
//! pool.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::Value;
use sqlx::mysql::{MySql, MySqlArguments, MySqlConnectOptions, MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::query::Query;
use sqlx::{Column, Row, TypeInfo, ValueRef};
use tracing::{debug, info, warn};

use crate::config::app_config::DatabaseConfig;
use crate::domain::{ProcedureArg, ViewName};
use crate::infrastructure::adapters::gateway::{DatabaseGateway, ViewRow};
use crate::shared::error::AppResult;

/// Gateway backed by a sqlx MySQL pool
pub struct MySqlGateway {
    pool: MySqlPool,
}

impl MySqlGateway {
    /// Build the pool without opening a connection; the first request (or
    /// health check) establishes one.
    pub fn connect_lazy(config: &DatabaseConfig) -> Self {
        info!(database = %config.redacted_url(), "Configuring database pool");

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .connect_lazy_with(connect_options(config));

        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

fn connect_options(config: &DatabaseConfig) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
}

/// `CALL name(?, ?, ...)` with one placeholder per argument
pub(crate) fn call_statement(procedure: &str, arity: usize) -> String {
    let placeholders = vec!["?"; arity].join(", ");
    format!("CALL `{}`({})", procedure, placeholders)
}

fn bind_arg<'q>(
    query: Query<'q, MySql, MySqlArguments>,
    arg: &'q ProcedureArg,
) -> Query<'q, MySql, MySqlArguments> {
    match arg {
        ProcedureArg::Null => query.bind(None::<String>),
        ProcedureArg::Text(s) => query.bind(s.as_str()),
        ProcedureArg::Integer(i) => query.bind(*i),
        ProcedureArg::Boolean(b) => query.bind(*b),
        ProcedureArg::Time(t) => query.bind(*t),
    }
}

#[async_trait]
impl DatabaseGateway for MySqlGateway {
    async fn execute_procedure(&self, procedure: &str, args: &[ProcedureArg]) -> AppResult<()> {
        let sql = call_statement(procedure, args.len());
        debug!(procedure = %procedure, arity = args.len(), "Dispatching stored procedure");

        let mut tx = self.pool.begin().await?;

        let query = args.iter().fold(sqlx::query(&sql), bind_arg);

        match query.execute(&mut *tx).await {
            Ok(_) => {
                tx.commit().await?;
                Ok(())
            }
            Err(e) => {
                if let Err(rollback) = tx.rollback().await {
                    warn!(procedure = %procedure, error = %rollback, "Rollback failed");
                }
                Err(e.into())
            }
        }
    }

    async fn query_view(&self, view: ViewName) -> AppResult<Vec<ViewRow>> {
        let sql = format!("SELECT * FROM `{}`", view.as_str());
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(row_to_json).collect())
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

fn row_to_json(row: &MySqlRow) -> ViewRow {
    row.columns()
        .iter()
        .map(|column| {
            let value = decode_column(row, column.ordinal(), column.type_info().name());
            (column.name().to_string(), value)
        })
        .collect()
}

/// Decode one column into JSON. Temporal types are rendered as strings.
fn decode_column(row: &MySqlRow, idx: usize, type_name: &str) -> Value {
    match row.try_get_raw(idx) {
        Ok(raw) if !raw.is_null() => {}
        _ => return Value::Null,
    }

    let decoded: Result<Value, sqlx::Error> = match type_name {
        "BOOLEAN" => row.try_get::<bool, _>(idx).map(Value::from),
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" | "YEAR" => {
            row.try_get::<i64, _>(idx).map(Value::from)
        }
        "TINYINT UNSIGNED" | "SMALLINT UNSIGNED" | "MEDIUMINT UNSIGNED" | "INT UNSIGNED"
        | "BIGINT UNSIGNED" => row.try_get::<u64, _>(idx).map(Value::from),
        "FLOAT" | "DOUBLE" => row.try_get::<f64, _>(idx).map(Value::from),
        // Sent as text on the wire; kept as a string to preserve precision
        "DECIMAL" => row.try_get_unchecked::<String, _>(idx).map(Value::String),
        "DATE" => row
            .try_get::<NaiveDate, _>(idx)
            .map(|d| Value::String(d.format("%Y-%m-%d").to_string())),
        "TIME" => row
            .try_get::<NaiveTime, _>(idx)
            .map(|t| Value::String(t.format("%H:%M:%S").to_string())),
        "DATETIME" => row
            .try_get::<NaiveDateTime, _>(idx)
            .map(|dt| Value::String(dt.format("%Y-%m-%d %H:%M:%S").to_string())),
        "TIMESTAMP" => row
            .try_get::<DateTime<Utc>, _>(idx)
            .map(|dt| Value::String(dt.format("%Y-%m-%d %H:%M:%S").to_string())),
        _ => row.try_get::<String, _>(idx).map(Value::String),
    };

    decoded.unwrap_or_else(|e| {
        warn!(column = idx, type_name = %type_name, error = %e, "Could not decode view column");
        Value::Null
    })
}
