// crates/geoselect-core/src/common.rs
//! Types shared by the controller, the stores and the hosts.
use serde::{Deserialize, Serialize};

/// One level of the country → state → city chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Country,
    State,
    City,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Country, Level::State, Level::City];

    /// Singular noun used in placeholders ("Select a state").
    pub fn noun(self) -> &'static str {
        match self {
            Level::Country => "country",
            Level::State => "state",
            Level::City => "city",
        }
    }

    /// Plural noun used in status lines and empty placeholders.
    pub fn plural(self) -> &'static str {
        match self {
            Level::Country => "countries",
            Level::State => "states",
            Level::City => "cities",
        }
    }

    /// The level whose options depend on this one, if any.
    pub fn child(self) -> Option<Level> {
        match self {
            Level::Country => Some(Level::State),
            Level::State => Some(Level::City),
            Level::City => None,
        }
    }
}

/// The user's current choice. An empty string means "unselected".
///
/// This is the whole of the persisted state. Missing fields in stored JSON
/// deserialize as empty strings so partially written payloads still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    pub country: String,
    pub state: String,
    pub city: String,
}

impl Selection {
    pub fn new(
        country: impl Into<String>,
        state: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            country: country.into(),
            state: state.into(),
            city: city.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.country.is_empty() && self.state.is_empty() && self.city.is_empty()
    }

    pub fn get(&self, level: Level) -> &str {
        match level {
            Level::Country => &self.country,
            Level::State => &self.state,
            Level::City => &self.city,
        }
    }

    /// Per-field fallback: keeps every non-empty field of `self` and fills
    /// the empty ones from `other`.
    pub fn or(self, other: &Selection) -> Selection {
        let pick = |mine: String, theirs: &str| {
            if mine.is_empty() {
                theirs.to_string()
            } else {
                mine
            }
        };
        Selection {
            country: pick(self.country, &other.country),
            state: pick(self.state, &other.state),
            city: pick(self.city, &other.city),
        }
    }
}

/// Simple aggregate statistics for a set of lookup tables.
///
/// Counts reflect the tables as fetched; orphaned entries (a state list keyed
/// by an unknown country) are counted too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupStats {
    pub countries: usize,
    pub states: usize,
    pub cities: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn or_prefers_own_non_empty_fields() {
        let url = Selection::new("US", "", "");
        let saved = Selection::new("CA", "ON", "TOR");
        assert_eq!(url.or(&saved), Selection::new("US", "ON", "TOR"));
    }

    #[test]
    fn partial_json_fills_missing_fields() {
        let s: Selection = serde_json::from_str(r#"{"country":"US"}"#).unwrap();
        assert_eq!(s, Selection::new("US", "", ""));
        assert!(!s.is_empty());
        assert!(Selection::default().is_empty());
    }

    #[test]
    fn level_chain() {
        assert_eq!(Level::Country.child(), Some(Level::State));
        assert_eq!(Level::State.child(), Some(Level::City));
        assert_eq!(Level::City.child(), None);
        assert_eq!(Level::City.plural(), "cities");
    }
}
