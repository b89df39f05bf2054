use crate::board_validator::duplicates;
use crate::player_color::{PlayerColor, EXPECTED_PLAYERS};
use crate::report::ValidationReport;
use crate::uuid_format::is_uuid;

use serde_json::{Map, Value};
use smallvec::SmallVec;
use std::collections::HashSet;
use strum::IntoEnumIterator;

/// Number of players on the roster.
const NUM_PLAYERS: usize = 5;

/// Checks a per-player board state against the base board's connections.
///
/// `state` maps player colors to the lists of connection ids they claimed,
/// exactly as parsed from the board-state document. `valid_connection_ids`
/// comes from [`crate::board::BoardDefinition::connection_ids`].
///
/// Checked, in order:
///
/// * the keys match the fixed five-color roster — missing colors are an
///   error, unknown extra keys only a warning;
/// * each player's value is a list; if not, that player is reported and
///   their entries are skipped;
/// * each entry is a UUID-shaped string naming a connection on the base
///   board, claimed by nobody earlier in the document (the first claim
///   wins, every later one is its own error);
/// * one consolidated scan over all claims reports every id held more than
///   once. This overlaps with the per-entry claim check on purpose; a
///   doubly-claimed id shows up in both.
///
/// Empty claim lists are legitimate and never reported.
pub fn validate_board_state(
    state: &Map<String, Value>,
    valid_connection_ids: &HashSet<&str>,
) -> ValidationReport {
    let mut report = ValidationReport::new();

    let missing: SmallVec<[String; NUM_PLAYERS]> = PlayerColor::iter()
        .map(|color| color.to_string())
        .filter(|color| !state.contains_key(color))
        .collect();
    if !missing.is_empty() {
        report.error(format!("Missing required players: {missing:?}"));
    }

    let extra: SmallVec<[&str; NUM_PLAYERS]> = state
        .keys()
        .map(String::as_str)
        .filter(|player| !EXPECTED_PLAYERS.contains(*player))
        .collect();
    if !extra.is_empty() {
        report.warning(format!("Unexpected players found: {extra:?}"));
    }

    let mut claimed = HashSet::new();
    for (player, edges) in state {
        let edges = match edges.as_array() {
            Some(edges) => edges,
            None => {
                report.error(format!(
                    "Player '{player}' edges must be a list, found {}",
                    json_type_name(edges)
                ));
                continue;
            }
        };

        for (position, edge) in edges.iter().enumerate() {
            // Positions are 1-based in every message.
            let position = position + 1;

            let edge_id = match edge.as_str() {
                Some(edge_id) => edge_id,
                None => {
                    report.error(format!(
                        "Player '{player}' edge {position} must be a string, found {}",
                        json_type_name(edge)
                    ));
                    continue;
                }
            };

            if !is_uuid(edge_id) {
                report.error(format!(
                    "Player '{player}' edge {position} is not a valid UUID: {edge_id}"
                ));
                continue;
            }

            // First claim wins; every later occurrence is its own error.
            if !claimed.insert(edge_id) {
                report.error(format!("Edge {edge_id} is claimed by multiple players"));
            }

            if !valid_connection_ids.contains(edge_id) {
                report.error(format!(
                    "Player '{player}' edge {position} ({edge_id}) does not exist in base board"
                ));
            }
        }
    }

    let all_claims = state
        .values()
        .filter_map(Value::as_array)
        .flatten()
        .filter_map(Value::as_str);
    let duplicate_claims = duplicates(all_claims);
    if !duplicate_claims.is_empty() {
        report.error(format!(
            "Duplicate edges found across players: {duplicate_claims:?}"
        ));
    }

    report
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
