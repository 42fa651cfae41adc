//! Result interaction tracking configuration.

use serde::{Deserialize, Serialize};

/// How result interactions feed back into ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Tracking {
    /// Click-through tracking. `field` names the record field carrying
    /// the destination URL; when absent the transport's default
    /// applies.
    Click {
        #[serde(default)]
        field: Option<String>,
    },
    /// Positive/negative relevance feedback keyed by a record field.
    PosNeg {
        #[serde(default)]
        field: Option<String>,
    },
}

impl Tracking {
    pub fn click() -> Self {
        Tracking::Click { field: None }
    }

    pub fn click_on(field: impl Into<String>) -> Self {
        Tracking::Click {
            field: Some(field.into()),
        }
    }

    pub fn pos_neg(field: impl Into<String>) -> Self {
        Tracking::PosNeg {
            field: Some(field.into()),
        }
    }

    /// Parses a tracking tag. Tags are case-sensitive; anything but
    /// `click` and `posneg` is unrecognized and yields `None`.
    pub fn from_tag(tag: &str, field: Option<String>) -> Option<Tracking> {
        match tag {
            "click" => Some(Tracking::Click { field }),
            "posneg" => Some(Tracking::PosNeg { field }),
            _ => None,
        }
    }
}

/// Tracking as the embed config spells it: either a bare tag string or
/// an object with an explicit field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrackingInput {
    Tag(String),
    Spec {
        #[serde(rename = "type")]
        tag: String,
        #[serde(default)]
        field: Option<String>,
    },
}

impl TrackingInput {
    pub fn parse(&self) -> Option<Tracking> {
        match self {
            TrackingInput::Tag(tag) => Tracking::from_tag(tag, None),
            TrackingInput::Spec { tag, field } => Tracking::from_tag(tag, field.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn bare_tags_parse_without_a_field() {
        let input: TrackingInput = serde_json::from_value(json!("click")).unwrap();
        assert_eq!(input.parse(), Some(Tracking::click()));

        let input: TrackingInput = serde_json::from_value(json!("posneg")).unwrap();
        assert_eq!(input.parse(), Some(Tracking::PosNeg { field: None }));
    }

    #[test]
    fn spec_objects_carry_their_field() {
        let input: TrackingInput =
            serde_json::from_value(json!({"type": "posneg", "field": "id"})).unwrap();
        assert_eq!(input.parse(), Some(Tracking::pos_neg("id")));
    }

    #[test]
    fn unrecognized_tags_parse_to_none() {
        assert_eq!(Tracking::from_tag("heatmap", None), None);
        assert_eq!(Tracking::from_tag("Click", None), None);
        assert_eq!(Tracking::from_tag("", None), None);
    }

    #[test]
    fn tracking_serializes_with_a_type_tag() {
        assert_eq!(
            serde_json::to_value(Tracking::pos_neg("id")).unwrap(),
            json!({"type": "posneg", "field": "id"})
        );
        assert_eq!(
            serde_json::to_value(Tracking::click()).unwrap(),
            json!({"type": "click", "field": null})
        );
    }
}
