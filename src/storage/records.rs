use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ValueRef};
use rusqlite::Row;
use serde::Serialize;

/// A row of the `restaurants` table. NULL cells serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: i64,
    pub name: Option<String>,
    pub cuisine: Option<String>,
    pub is_veg: Option<bool>,
    pub has_outdoor_seating: Option<bool>,
    pub is_luxury: Option<bool>,
    pub rating: Option<f64>,
}

/// A row of the `dishes` table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: i64,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub is_veg: Option<bool>,
}

/// Rows returned by a lookup, tagged with the collection they belong to.
///
/// Serializes as the response envelope, e.g. `{"restaurants": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rows {
    Restaurants(Vec<Restaurant>),
    Dishes(Vec<Dish>),
}

impl Rows {
    pub fn len(&self) -> usize {
        match self {
            Rows::Restaurants(rows) => rows.len(),
            Rows::Dishes(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Row counts reported by the health endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogCounts {
    pub restaurants: usize,
    pub dishes: usize,
}

impl Restaurant {
    /// Column list matching the field order read by [`Restaurant::from_row`]
    pub const COLUMNS: &'static str =
        "id, name, cuisine, isVeg, hasOutdoorSeating, isLuxury, rating";

    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            cuisine: row.get(2)?,
            is_veg: row.get::<_, Flag>(3)?.0,
            has_outdoor_seating: row.get::<_, Flag>(4)?.0,
            is_luxury: row.get::<_, Flag>(5)?.0,
            rating: row.get(6)?,
        })
    }
}

impl Dish {
    /// Column list matching the field order read by [`Dish::from_row`]
    pub const COLUMNS: &'static str = "id, name, price, isVeg";

    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            price: row.get(2)?,
            is_veg: row.get::<_, Flag>(3)?.0,
        })
    }
}

/// Boolean column value.
///
/// Accepts NULL, integers and reals (zero is false) as well as the text
/// forms `true`/`false`/`1`/`0` written by older loaders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Flag(Option<bool>);

impl FromSql for Flag {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Null => Ok(Flag(None)),
            ValueRef::Integer(n) => Ok(Flag(Some(n != 0))),
            ValueRef::Real(f) => Ok(Flag(Some(f != 0.0))),
            ValueRef::Text(text) => match text {
                b"true" | b"1" => Ok(Flag(Some(true))),
                b"false" | b"0" => Ok(Flag(Some(false))),
                _ => Err(FromSqlError::InvalidType),
            },
            ValueRef::Blob(_) => Err(FromSqlError::InvalidType),
        }
    }
}
