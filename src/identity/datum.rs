use serde_json::Value;

/// Type tags whose elements are not individually addressable marks.
pub const UNADDRESSABLE_TAGS: [&str; 3] = ["axis", "legend", "nested-chart"];

const TYPE_FIELD: &str = "_TYPE";
const MARK_ID_FIELD: &str = "_MARKID";

#[derive(Clone, Debug, PartialEq, Eq)]
/// A data-datum payload parsed once at the renderer boundary.
pub enum Datum {
    /// Descriptor carrying a `_TYPE` tag (and possibly a `_MARKID`).
    Tagged {
        type_tag: String,
        mark_id: Option<String>,
    },
    /// Valid JSON without a string `_TYPE` field.
    Untagged,
    /// Payload that is not JSON; kept verbatim.
    Unparseable(String),
}

impl Datum {
    /// Parse a payload string. A top-level array is unwrapped to its first element.
    pub fn parse(payload: &str) -> Self {
        let value: Value = match serde_json::from_str(payload) {
            Ok(v) => v,
            Err(err) => {
                tracing::debug!(%err, "datum payload is not JSON, using it verbatim");
                return Self::Unparseable(payload.to_owned());
            }
        };

        let value = match value {
            Value::Array(items) => items.into_iter().next().unwrap_or(Value::Null),
            other => other,
        };

        let Value::Object(map) = value else {
            return Self::Untagged;
        };
        let Some(Value::String(type_tag)) = map.get(TYPE_FIELD) else {
            return Self::Untagged;
        };
        let mark_id = match map.get(MARK_ID_FIELD) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        Self::Tagged {
            type_tag: type_tag.clone(),
            mark_id,
        }
    }

    /// The `_TYPE` tag, when present.
    pub fn type_tag(&self) -> Option<&str> {
        match self {
            Self::Tagged { type_tag, .. } => Some(type_tag),
            Self::Untagged | Self::Unparseable(_) => None,
        }
    }

    /// `false` for axes, legends and nested charts.
    pub fn is_addressable(&self) -> bool {
        self.type_tag()
            .is_none_or(|tag| !UNADDRESSABLE_TAGS.contains(&tag))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/identity/datum.rs"]
mod tests;
