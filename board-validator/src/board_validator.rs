use crate::board::{BoardDefinition, NUM_CITIES};
use crate::report::ValidationReport;
use crate::train_color::TrainColor;
use crate::uuid_format::is_uuid;

use std::collections::{BTreeSet, HashSet};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// How many train cards a connection may cost.
const COST_RANGE: RangeInclusive<i64> = 1..=6;

/// Checks a board definition for structural and referential integrity.
///
/// Every violation is collected; the pass never stops at the first error.
/// Checked, in order:
///
/// * the map holds exactly 36 cities, with unique names;
/// * each connection has a known color, a cost between 1 and 6, and a
///   UUID-shaped id;
/// * each connection lists its cities in alphabetical order, and both
///   cities exist on the map;
/// * connection ids are unique across the whole board.
pub fn validate_board(board: &BoardDefinition) -> ValidationReport {
    let mut report = ValidationReport::new();

    if board.cities.len() != NUM_CITIES {
        report.error(format!(
            "Expected {NUM_CITIES} cities, found {}",
            board.cities.len()
        ));
    }

    let duplicate_names = duplicates(board.cities.iter().map(|city| city.name.as_str()));
    if !duplicate_names.is_empty() {
        report.error(format!("Duplicate city names: {duplicate_names:?}"));
    }

    let city_names = board.city_names();
    for (position, connection) in board.connections.iter().enumerate() {
        // Positions are 1-based in every message.
        let position = position + 1;

        if TrainColor::from_str(&connection.color).is_err() {
            report.error(format!(
                "Connection {position}: color must be one of [{}], found '{}'",
                TrainColor::all_names(),
                connection.color
            ));
        }

        if !COST_RANGE.contains(&connection.cost) {
            report.error(format!(
                "Connection {position}: cost must be between {} and {}, found {}",
                COST_RANGE.start(),
                COST_RANGE.end(),
                connection.cost
            ));
        }

        if !is_uuid(&connection.id) {
            report.error(format!(
                "Connection {position}: id must be a valid UUID: {}",
                connection.id
            ));
        }

        if connection.city1 >= connection.city2 {
            report.error(format!(
                "Connection {position}: city1 '{}' should be alphabetically before city2 '{}'",
                connection.city1, connection.city2
            ));
        }

        if !city_names.contains(connection.city1.as_str()) {
            report.error(format!(
                "Connection {position}: city1 '{}' is not a valid city",
                connection.city1
            ));
        }

        if !city_names.contains(connection.city2.as_str()) {
            report.error(format!(
                "Connection {position}: city2 '{}' is not a valid city",
                connection.city2
            ));
        }
    }

    let duplicate_ids = duplicates(
        board
            .connections
            .iter()
            .map(|connection| connection.id.as_str()),
    );
    if !duplicate_ids.is_empty() {
        report.error(format!("Duplicate connection IDs: {duplicate_ids:?}"));
    }

    report
}

/// Values appearing more than once, deduplicated and sorted so reports are
/// stable across runs.
pub(crate) fn duplicates<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut repeated = BTreeSet::new();

    for value in values {
        if !seen.insert(value) {
            repeated.insert(value);
        }
    }

    repeated.into_iter().collect()
}
