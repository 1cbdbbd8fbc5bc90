use parking_lot::Mutex;
use rusqlite::{Connection, OpenFlags, params_from_iter};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

use super::lookup::{BoolStorage, Collection, Lookup};
use super::records::{CatalogCounts, Dish, Restaurant, Rows};
use super::{Catalog, StoreError};

/// Catalog backed by a single SQLite database file.
///
/// All access is serialized through a `Mutex` because
/// `rusqlite::Connection` is not `Sync`.
pub struct SqliteCatalog {
    conn: Mutex<Connection>,
    bools: BoolStorage,
}

impl SqliteCatalog {
    /// Open an existing database file read-only
    pub fn open(path: &Path, bools: BoolStorage) -> Result<Self, StoreError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        info!(path = %path.display(), "SQLite catalog opened (read-only)");

        Ok(Self::from_connection(conn, bools))
    }

    /// Wrap an already opened connection, e.g. an in-memory database
    pub fn from_connection(conn: Connection, bools: BoolStorage) -> Self {
        Self {
            conn: Mutex::new(conn),
            bools,
        }
    }

    fn count(conn: &Connection, collection: Collection) -> Result<usize, StoreError> {
        let sql = format!("SELECT COUNT(*) FROM {};", collection.table());
        let count: i64 = conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}

impl Catalog for SqliteCatalog {
    fn fetch(&self, lookup: &Lookup) -> Result<Rows, StoreError> {
        let start = Instant::now();
        let params = lookup.params(self.bools);
        let conn = self.conn.lock();

        let rows = match lookup.collection() {
            Collection::Restaurants => {
                let mut stmt = conn.prepare_cached(&lookup.sql(Restaurant::COLUMNS))?;
                let rows = stmt
                    .query_map(params_from_iter(params), Restaurant::from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Rows::Restaurants(rows)
            }
            Collection::Dishes => {
                let mut stmt = conn.prepare_cached(&lookup.sql(Dish::COLUMNS))?;
                let rows = stmt
                    .query_map(params_from_iter(params), Dish::from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Rows::Dishes(rows)
            }
        };

        debug!(
            ?lookup,
            rows = rows.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Query executed"
        );

        Ok(rows)
    }

    fn counts(&self) -> Result<CatalogCounts, StoreError> {
        let conn = self.conn.lock();
        Ok(CatalogCounts {
            restaurants: Self::count(&conn, Collection::Restaurants)?,
            dishes: Self::count(&conn, Collection::Dishes)?,
        })
    }
}
