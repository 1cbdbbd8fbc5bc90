use rusqlite::types::Value;
use serde::Deserialize;

/// How flag columns are encoded when bound as predicate values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoolStorage {
    /// `1` / `0`
    #[default]
    Integer,
    /// `'true'` / `'false'`
    Text,
}

impl BoolStorage {
    pub fn bind(self, flag: bool) -> Value {
        match self {
            BoolStorage::Integer => Value::Integer(i64::from(flag)),
            BoolStorage::Text => Value::Text(flag.to_string()),
        }
    }
}

/// Which table a lookup reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Restaurants,
    Dishes,
}

impl Collection {
    pub fn table(self) -> &'static str {
        match self {
            Collection::Restaurants => "restaurants",
            Collection::Dishes => "dishes",
        }
    }
}

/// Requested values for the restaurant filter endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestaurantFilter {
    pub is_veg: bool,
    pub has_outdoor_seating: bool,
    pub is_luxury: bool,
}

/// One of the fixed read queries the API can run, with its parsed inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    AllRestaurants,
    RestaurantById(i64),
    RestaurantsByCuisine(String),
    RestaurantsByFilter(RestaurantFilter),
    RestaurantsByRating,
    AllDishes,
    DishById(i64),
    DishesByFilter { is_veg: bool },
    DishesByPrice,
}

impl Lookup {
    pub fn collection(&self) -> Collection {
        match self {
            Lookup::AllRestaurants
            | Lookup::RestaurantById(_)
            | Lookup::RestaurantsByCuisine(_)
            | Lookup::RestaurantsByFilter(_)
            | Lookup::RestaurantsByRating => Collection::Restaurants,
            Lookup::AllDishes
            | Lookup::DishById(_)
            | Lookup::DishesByFilter { .. }
            | Lookup::DishesByPrice => Collection::Dishes,
        }
    }

    /// Predicate and ordering appended after `SELECT <columns> FROM <table>`.
    ///
    /// Sorted lookups break ties on `id` so repeated reads are stable.
    fn clause(&self) -> &'static str {
        match self {
            Lookup::AllRestaurants | Lookup::AllDishes => "",
            Lookup::RestaurantById(_) | Lookup::DishById(_) => " WHERE id = ?1",
            Lookup::RestaurantsByCuisine(_) => " WHERE cuisine = ?1",
            Lookup::RestaurantsByFilter(_) => {
                " WHERE isVeg = ?1 AND hasOutdoorSeating = ?2 AND isLuxury = ?3"
            }
            Lookup::RestaurantsByRating => " ORDER BY rating ASC, id ASC",
            Lookup::DishesByFilter { .. } => " WHERE isVeg = ?1",
            Lookup::DishesByPrice => " ORDER BY price ASC, id ASC",
        }
    }

    pub fn sql(&self, columns: &str) -> String {
        format!(
            "SELECT {} FROM {}{};",
            columns,
            self.collection().table(),
            self.clause()
        )
    }

    pub fn params(&self, bools: BoolStorage) -> Vec<Value> {
        match self {
            Lookup::AllRestaurants
            | Lookup::RestaurantsByRating
            | Lookup::AllDishes
            | Lookup::DishesByPrice => Vec::new(),
            Lookup::RestaurantById(id) | Lookup::DishById(id) => vec![Value::Integer(*id)],
            Lookup::RestaurantsByCuisine(cuisine) => vec![Value::Text(cuisine.clone())],
            Lookup::RestaurantsByFilter(filter) => vec![
                bools.bind(filter.is_veg),
                bools.bind(filter.has_outdoor_seating),
                bools.bind(filter.is_luxury),
            ],
            Lookup::DishesByFilter { is_veg } => vec![bools.bind(*is_veg)],
        }
    }

    /// Message returned with a 404 when the lookup matches nothing
    pub fn not_found_message(&self) -> String {
        match self {
            Lookup::AllRestaurants | Lookup::RestaurantsByRating => {
                "No restaurants found!".to_string()
            }
            Lookup::RestaurantById(id) => format!("No Restaurant by ID: {} is present", id),
            Lookup::RestaurantsByCuisine(cuisine) => {
                format!("No restaurants found by {} cuisine.", cuisine)
            }
            Lookup::RestaurantsByFilter(filter) => format!(
                "No such restaurant is Found! (isVeg: {}, hasOutdoorSeating: {}, isLuxury: {})",
                filter.is_veg, filter.has_outdoor_seating, filter.is_luxury
            ),
            Lookup::AllDishes | Lookup::DishesByPrice => "No dishes found!".to_string(),
            Lookup::DishById(id) => format!("No dish found by ID: {}", id),
            Lookup::DishesByFilter { is_veg } => format!("No dishes found! (isVeg: {})", is_veg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_sort_reads_restaurants_table() {
        assert_eq!(
            Lookup::RestaurantsByRating.sql("*"),
            "SELECT * FROM restaurants ORDER BY rating ASC, id ASC;"
        );
    }

    #[test]
    fn test_filter_binds_three_flags_in_order() {
        let lookup = Lookup::RestaurantsByFilter(RestaurantFilter {
            is_veg: true,
            has_outdoor_seating: false,
            is_luxury: true,
        });

        assert_eq!(
            lookup.params(BoolStorage::Integer),
            vec![Value::Integer(1), Value::Integer(0), Value::Integer(1)]
        );
        assert_eq!(
            lookup.params(BoolStorage::Text),
            vec![
                Value::Text("true".to_string()),
                Value::Text("false".to_string()),
                Value::Text("true".to_string())
            ]
        );
    }

    #[test]
    fn test_id_lookup_binds_integer() {
        let lookup = Lookup::DishById(7);
        assert_eq!(lookup.sql("id"), "SELECT id FROM dishes WHERE id = ?1;");
        assert_eq!(lookup.params(BoolStorage::Integer), vec![Value::Integer(7)]);
    }

    #[test]
    fn test_not_found_messages_name_the_filter_value() {
        assert_eq!(
            Lookup::RestaurantById(7).not_found_message(),
            "No Restaurant by ID: 7 is present"
        );
        assert_eq!(
            Lookup::RestaurantsByCuisine("Thai".to_string()).not_found_message(),
            "No restaurants found by Thai cuisine."
        );
        assert_eq!(Lookup::DishById(3).not_found_message(), "No dish found by ID: 3");
        assert_eq!(
            Lookup::DishesByFilter { is_veg: false }.not_found_message(),
            "No dishes found! (isVeg: false)"
        );
        assert_eq!(Lookup::AllRestaurants.not_found_message(), "No restaurants found!");
        assert_eq!(Lookup::DishesByPrice.not_found_message(), "No dishes found!");
    }

    #[test]
    fn test_collection_routing() {
        assert_eq!(Lookup::RestaurantsByRating.collection(), Collection::Restaurants);
        assert_eq!(Lookup::DishesByFilter { is_veg: true }.collection(), Collection::Dishes);
    }
}
