use serde::Deserialize;
use std::collections::HashSet;

/// Number of cities on the map.
pub const NUM_CITIES: usize = 36;

/// A city on the map, identified by its unique name.
///
/// # JSON
/// ```json
/// { "name": "Boston", "x": 870, "y": 95 }
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct City {
    pub name: String,
    /// Horizontal position on the rendered map. Carried, but not validated.
    pub x: i64,
    /// Vertical position on the rendered map. Carried, but not validated.
    pub y: i64,
}

/// An edge between two cities.
///
/// `color`, `cost` and `id` are kept in their raw wire form: the
/// board-definition validator reports every enum, range, and format
/// violation itself, rather than letting deserialization reject the
/// document at the first bad field.
///
/// # JSON
/// ```json
/// {
///   "city1": "Boston",
///   "city2": "New York",
///   "color": "yellow",
///   "cost": 2,
///   "id": "25792d7d-5e2f-4a4a-8d80-48c2e94c35e0"
/// }
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Connection {
    pub city1: String,
    pub city2: String,
    /// One of the nine train colors, once validated.
    pub color: String,
    /// Number of train cards needed to claim the edge. Valid range is 1 to 6.
    pub cost: i64,
    /// UUID uniquely identifying the edge across the whole board.
    pub id: String,
}

/// The canonical map data: all cities, and all connections between them.
///
/// This is the reference document that board states and route lists are
/// validated against.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BoardDefinition {
    pub cities: Vec<City>,
    pub connections: Vec<Connection>,
}

impl BoardDefinition {
    /// The set of city names present on the board.
    pub fn city_names(&self) -> HashSet<&str> {
        self.cities.iter().map(|city| city.name.as_str()).collect()
    }

    /// The set of connection ids present on the board.
    pub fn connection_ids(&self) -> HashSet<&str> {
        self.connections
            .iter()
            .map(|connection| connection.id.as_str())
            .collect()
    }
}
