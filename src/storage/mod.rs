pub mod lookup;
pub mod records;
pub mod sqlite;

pub use lookup::{BoolStorage, Collection, Lookup, RestaurantFilter};
pub use records::{CatalogCounts, Dish, Restaurant, Rows};
pub use sqlite::SqliteCatalog;

/// Errors raised while reading the catalog
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The engine rejected or failed the query
    #[error("{0}")]
    Sqlite(rusqlite::Error),

    /// A stored cell could not be read as its column's type
    #[error("{0}")]
    Decode(rusqlite::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::InvalidColumnType(..)
            | rusqlite::Error::FromSqlConversionFailure(..)
            | rusqlite::Error::IntegralValueOutOfRange(..) => StoreError::Decode(err),
            other => StoreError::Sqlite(other),
        }
    }
}

/// Read-only access to the restaurant and dish tables.
///
/// Calls block; async callers run them on the blocking pool.
pub trait Catalog: Send + Sync {
    /// Run one lookup and return every matching row
    fn fetch(&self, lookup: &Lookup) -> Result<Rows, StoreError>;

    fn counts(&self) -> Result<CatalogCounts, StoreError>;
}
