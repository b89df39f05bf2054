use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// The fixed five-player roster.
///
/// A board-state document must have exactly one entry per roster color.
///
/// # JSON
/// Player colors are serialized in lowercase.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerColor {
    Black,
    Blue,
    Green,
    Red,
    Yellow,
}

lazy_static! {
    /// Lowercase names of every roster color. Read-only process-wide
    /// configuration, initialized once.
    pub static ref EXPECTED_PLAYERS: HashSet<String> =
        PlayerColor::iter().map(|color| color.to_string()).collect();
}
