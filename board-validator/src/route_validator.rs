use crate::report::ValidationReport;

use serde_json::Value;
use std::collections::HashSet;

/// Checks a list of scoring routes against the base board's cities.
///
/// Route records stay in raw JSON form because field presence and types
/// are themselves under validation. Per record: `city1`, `city2` and
/// `points` must all be present (otherwise the record is reported once
/// and skipped); both cities must exist on the base board, each checked
/// on its own; `points` must be a nonnegative integer; and a route may
/// not loop from a city back to itself.
///
/// Route validation has no warnings; the returned report's warning list
/// is always empty.
pub fn validate_routes(routes: &[Value], valid_cities: &HashSet<&str>) -> ValidationReport {
    let mut report = ValidationReport::new();

    for (position, route) in routes.iter().enumerate() {
        // Positions are 1-based in every message.
        let position = position + 1;

        let fields = (
            route.get("city1"),
            route.get("city2"),
            route.get("points"),
        );
        let (city1, city2, points) = match fields {
            (Some(city1), Some(city2), Some(points)) => (city1, city2, points),
            _ => {
                report.error(format!(
                    "Route {position}: Missing required fields (city1, city2, or points)"
                ));
                continue;
            }
        };

        if !is_known_city(city1, valid_cities) {
            report.error(format!(
                "Route {position}: City '{}' not found in base board",
                render(city1)
            ));
        }

        if !is_known_city(city2, valid_cities) {
            report.error(format!(
                "Route {position}: City '{}' not found in base board",
                render(city2)
            ));
        }

        match points.as_i64() {
            Some(points) if points >= 0 => {}
            _ => {
                report.error(format!(
                    "Route {position}: Points must be a nonnegative integer, got {}",
                    render(points)
                ));
            }
        }

        if city1 == city2 {
            report.error(format!(
                "Route {position}: Cannot route from '{}' to itself",
                render(city1)
            ));
        }
    }

    report
}

fn is_known_city(value: &Value, valid_cities: &HashSet<&str>) -> bool {
    value
        .as_str()
        .map_or(false, |name| valid_cities.contains(name))
}

// Strings render bare; anything else renders as its JSON form.
fn render(value: &Value) -> String {
    match value.as_str() {
        Some(name) => String::from(name),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn cities() -> HashSet<&'static str> {
        ["Boston", "Miami", "New York"].into_iter().collect()
    }

    #[test]
    fn well_formed_routes_pass() {
        let routes = vec![
            json!({ "city1": "Boston", "city2": "New York", "points": 5 }),
            json!({ "city1": "Miami", "city2": "Boston", "points": 12 }),
        ];

        let report = validate_routes(&routes, &cities());

        assert!(report.is_valid());
        assert_eq!(report.errors(), &[] as &[String]);
        assert_eq!(report.warnings(), &[] as &[String]);
    }

    #[test]
    fn missing_fields_skip_the_remaining_checks() {
        let routes = vec![
            json!({}),
            json!({ "city1": "Boston", "city2": "Miami" }),
            json!({ "city1": "Boston", "points": 4 }),
        ];

        let report = validate_routes(&routes, &cities());

        assert_eq!(
            report.errors(),
            [
                "Route 1: Missing required fields (city1, city2, or points)",
                "Route 2: Missing required fields (city1, city2, or points)",
                "Route 3: Missing required fields (city1, city2, or points)",
            ]
        );
    }

    #[test]
    fn both_cities_are_checked_independently() {
        let routes = vec![json!({ "city1": "Atlantis", "city2": "Lemuria", "points": 1 })];

        let report = validate_routes(&routes, &cities());

        assert_eq!(
            report.errors(),
            [
                "Route 1: City 'Atlantis' not found in base board",
                "Route 1: City 'Lemuria' not found in base board",
            ]
        );
    }

    #[test]
    fn self_loop_is_exactly_one_error() {
        let routes = vec![json!({ "city1": "Boston", "city2": "Boston", "points": 3 })];

        let report = validate_routes(&routes, &cities());

        assert!(!report.is_valid());
        assert_eq!(
            report.errors(),
            ["Route 1: Cannot route from 'Boston' to itself"]
        );
    }

    #[test]
    fn negative_points_fail_and_zero_points_pass() {
        let routes = vec![
            json!({ "city1": "Boston", "city2": "Miami", "points": -1 }),
            json!({ "city1": "Boston", "city2": "New York", "points": 0 }),
        ];

        let report = validate_routes(&routes, &cities());

        assert_eq!(
            report.errors(),
            ["Route 1: Points must be a nonnegative integer, got -1"]
        );
    }

    #[test]
    fn points_must_be_an_integer() {
        let routes = vec![
            json!({ "city1": "Boston", "city2": "Miami", "points": 2.5 }),
            json!({ "city1": "Boston", "city2": "New York", "points": "3" }),
        ];

        let report = validate_routes(&routes, &cities());

        assert_eq!(
            report.errors(),
            [
                "Route 1: Points must be a nonnegative integer, got 2.5",
                "Route 2: Points must be a nonnegative integer, got 3",
            ]
        );
    }

    #[test]
    fn non_string_cities_are_reported_like_unknown_cities() {
        let routes = vec![json!({ "city1": 17, "city2": 17, "points": 2 })];

        let report = validate_routes(&routes, &cities());

        assert_eq!(
            report.errors(),
            [
                "Route 1: City '17' not found in base board",
                "Route 1: City '17' not found in base board",
                "Route 1: Cannot route from '17' to itself",
            ]
        );
    }

    #[test]
    fn positions_are_one_based() {
        let routes = vec![
            json!({ "city1": "Boston", "city2": "Miami", "points": 6 }),
            json!({ "city1": "Boston", "city2": "Narnia", "points": 6 }),
        ];

        let report = validate_routes(&routes, &cities());

        assert_eq!(
            report.errors(),
            ["Route 2: City 'Narnia' not found in base board"]
        );
    }

    #[test]
    fn validation_is_idempotent() {
        let routes = vec![
            json!({ "city1": "Boston", "city2": "Boston", "points": -2 }),
            json!({ "city2": "Miami" }),
        ];

        assert_eq!(
            validate_routes(&routes, &cities()),
            validate_routes(&routes, &cities())
        );
    }
}
