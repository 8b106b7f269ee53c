use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value};

use crate::shared::constants::{ATTR_RESPONSE_TIME, ATTR_TOTAL_FACES};

/// Extra state attributes of a recognition entity.
///
/// Serializes as one flat object: a key per matched face holding its
/// confidence, plus `total_faces` and `response_time`. The two fixed keys are
/// always present (null when unset) and win over a face with the same name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntityAttributes {
    pub faces: BTreeMap<String, f64>,
    pub total_faces: Option<u32>,
    pub response_time: Option<f64>,
}

impl EntityAttributes {
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map: Map<String, Value> = self
            .faces
            .iter()
            .map(|(name, confidence)| (name.clone(), float_value(*confidence)))
            .collect();
        map.insert(
            ATTR_TOTAL_FACES.to_string(),
            self.total_faces.map_or(Value::Null, Value::from),
        );
        map.insert(
            ATTR_RESPONSE_TIME.to_string(),
            self.response_time.map_or(Value::Null, float_value),
        );
        map
    }
}

/// Non-finite floats have no JSON form and become null.
fn float_value(value: f64) -> Value {
    Number::from_f64(value).map_or(Value::Null, Value::Number)
}

impl Serialize for EntityAttributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}
