//! Database repository layer for schools and students.
//!
//! Repositories handle the CRUD queries for each entity. They use SeaORM entity models
//! internally and return domain models so that entity types never leave the data layer.
//! Every repository is generic over `ConnectionTrait`, so the same queries run against the
//! pooled connection or inside a transaction opened by a service.

pub mod school;
pub mod student;

use sea_orm::{
    sea_query::LikeExpr, ConnectionTrait, DatabaseBackend, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityName, TransactionTrait,
};

const LIKE_ESCAPE: char = '!';

/// Begins a transaction for a capacity-checked write.
///
/// SQLite transactions start deferred and a read-then-write transaction cannot wait for
/// another writer; it fails with `SQLITE_BUSY`. On SQLite the write lock is therefore taken
/// by the first statement, so concurrent writers queue on the busy timeout.
pub async fn begin_write(db: &DatabaseConnection) -> Result<DatabaseTransaction, DbErr> {
    let txn = db.begin().await?;

    if txn.get_database_backend() == DatabaseBackend::Sqlite {
        let table = entity::prelude::School.table_name();
        txn.execute_unprepared(&format!("UPDATE {} SET id = id WHERE 0", table))
            .await?;
    }

    Ok(txn)
}

/// Builds a `LIKE` pattern matching `search` as a literal substring.
fn substring_pattern(search: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape(LIKE_ESCAPE)
}

#[cfg(test)]
mod test;
