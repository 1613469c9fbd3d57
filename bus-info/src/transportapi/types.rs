//! TransportAPI response DTOs.
//!
//! These map the parts of the live stop response (`uk/bus/stop/{atco}/live.json`)
//! we read. Unknown fields are ignored.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::domain::RawDeparture;

/// Live departures at a stop, grouped the API's default way.
#[derive(Debug, Clone, Deserialize)]
pub struct LiveStopResponse {
    /// Human-readable name of the stop.
    pub name: String,

    /// Departures keyed by sub-group (route, mode or operator depending on
    /// the `group` parameter), in the order the API sent them.
    #[serde(deserialize_with = "groups_in_document_order")]
    pub departures: Vec<(String, Vec<RawDeparture>)>,
}

/// Read a JSON object of departure groups as a list, keeping key order.
fn groups_in_document_order<'de, D>(
    deserializer: D,
) -> Result<Vec<(String, Vec<RawDeparture>)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct GroupsVisitor;

    impl<'de> Visitor<'de> for GroupsVisitor {
        type Value = Vec<(String, Vec<RawDeparture>)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object of departure groups")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(group) = map.next_entry()? {
                groups.push(group);
            }
            Ok(groups)
        }
    }

    deserializer.deserialize_map(GroupsVisitor)
}

/// Live departures at a stop, read for the flat "all" group only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AllDeparturesResponse {
    #[serde(default)]
    pub departures: Option<AllDepartures>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AllDepartures {
    #[serde(default)]
    pub all: Option<Vec<RawDeparture>>,
}

impl AllDeparturesResponse {
    /// The "all" group in API order; empty if the group is missing.
    pub fn into_all(self) -> Vec<RawDeparture> {
        self.departures.and_then(|d| d.all).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn live_stop_groups() {
        let response: LiveStopResponse = serde_json::from_value(json!({
            "atcocode": "490004733D",
            "name": "Trafalgar Square",
            "request_time": "2024-03-15T12:00:00+00:00",
            "departures": {
                "25": [{"line": "25", "direction": "Oxford Circus",
                        "expected_departure_date": "2024-03-15",
                        "best_departure_estimate": "12:03"}],
                "9": [],
            }
        }))
        .unwrap();

        assert_eq!(response.name, "Trafalgar Square");
        assert_eq!(response.departures.len(), 2);
        assert_eq!(response.departures[0].0, "25");
        assert_eq!(response.departures[0].1[0].line, "25");
    }

    #[test]
    fn live_stop_groups_keep_document_order() {
        let body = r#"{
            "name": "Trafalgar Square",
            "departures": {"zeta": [], "alpha": [], "mu": []}
        }"#;

        // Through a Value, as the client decodes it
        let value: serde_json::Value = serde_json::from_str(body).unwrap();
        let response: LiveStopResponse = serde_json::from_value(value).unwrap();

        let keys: Vec<&str> = response.departures.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mu"]);
    }

    #[test]
    fn live_stop_groups_must_be_object() {
        let result: Result<LiveStopResponse, _> =
            serde_json::from_value(json!({"name": "Trafalgar Square", "departures": []}));
        assert!(result.is_err());
    }

    #[test]
    fn live_stop_requires_departures() {
        let result: Result<LiveStopResponse, _> =
            serde_json::from_value(json!({"name": "Trafalgar Square"}));
        assert!(result.is_err());
    }

    #[test]
    fn all_group_read() {
        let response: AllDeparturesResponse = serde_json::from_value(json!({
            "departures": {
                "all": [
                    {"line": "9", "direction": "Aldwych", "best_departure_estimate": "12:10"},
                    {"line": "25", "direction": "Oxford Circus", "best_departure_estimate": "12:03"},
                ]
            }
        }))
        .unwrap();

        let all = response.into_all();
        assert_eq!(all.len(), 2);
        // API order, not time order
        assert_eq!(all[0].line, "9");
    }

    #[test]
    fn all_group_missing_is_empty() {
        for body in [
            json!({}),
            json!({"departures": null}),
            json!({"departures": {}}),
            json!({"departures": {"bus": [{"line": "9", "direction": "Aldwych"}]}}),
            json!({"departures": {"all": null}}),
        ] {
            let response: AllDeparturesResponse = serde_json::from_value(body).unwrap();
            assert!(response.into_all().is_empty());
        }
    }
}
