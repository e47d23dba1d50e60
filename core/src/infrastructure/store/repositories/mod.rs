pub mod map_repository;
pub mod provenance_repository;

use sqlx::{PgPool, postgres::PgRow};
use tracing::error;

use crate::{
    domain::common::entities::app_errors::CoreError,
    infrastructure::store::{
        descriptors::TableDescriptor,
        statements::{self, SqlParam, SqlStatement},
    },
};

fn store_error(descriptor: &TableDescriptor, err: sqlx::Error) -> CoreError {
    error!(table = descriptor.table, error = %err, "store query failed");
    CoreError::Store(err.to_string())
}

/// Fetch one row by public uid; a miss is an ordinary not-found.
pub(crate) async fn fetch_by_uid<R>(
    pool: &PgPool,
    descriptor: &TableDescriptor,
    uid: &str,
) -> Result<R, CoreError>
where
    R: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
{
    let sql = statements::select_by_uid(descriptor);
    let row = sqlx::query_as::<_, R>(&sql)
        .bind(uid)
        .fetch_optional(pool)
        .await
        .map_err(|err| store_error(descriptor, err))?;

    row.ok_or_else(|| CoreError::NotFound {
        entity: descriptor.element(),
        uid: uid.to_string(),
    })
}

/// Fetch one row by internal id; a miss means a stored reference points at
/// a row that does not exist.
pub(crate) async fn fetch_by_id<R>(
    pool: &PgPool,
    descriptor: &TableDescriptor,
    id: i32,
) -> Result<R, CoreError>
where
    R: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
{
    let sql = statements::select_by_id(descriptor);
    let row = sqlx::query_as::<_, R>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|err| store_error(descriptor, err))?;

    row.ok_or_else(|| CoreError::Consistency {
        entity: descriptor.element(),
        id,
    })
}

/// Execute a composed statement and collect every row. Zero rows is a valid
/// empty result, never an error.
pub(crate) async fn fetch_filtered<R>(
    pool: &PgPool,
    descriptor: &TableDescriptor,
    statement: &SqlStatement,
) -> Result<Vec<R>, CoreError>
where
    R: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
{
    let mut query = sqlx::query_as::<_, R>(&statement.sql);
    for param in &statement.params {
        query = match param {
            SqlParam::Int(value) => query.bind(*value),
            SqlParam::Float(value) => query.bind(*value),
            SqlParam::Text(value) => query.bind(value.clone()),
        };
    }

    query
        .fetch_all(pool)
        .await
        .map_err(|err| store_error(descriptor, err))
}
