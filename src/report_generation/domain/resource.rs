use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Attribute mapping of one deployed instance. The schema depends on the
/// resource type and is never known statically.
pub type Attributes = Map<String, Value>;

fn unknown() -> String {
    "unknown".to_string()
}

/// Scalars become their text; null and containers become `"unknown"`
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => unknown(),
    })
}

/// Anything other than an object becomes an empty attribute map
fn lenient_attributes<'de, D>(deserializer: D) -> Result<Attributes, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(attributes) => attributes,
        _ => Attributes::new(),
    })
}

/// Decodes instances one entry at a time. A malformed entry degrades to an
/// instance without attributes; a non-list yields no instances.
fn lenient_instances<'de, D>(deserializer: D) -> Result<Vec<InstanceRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match Value::deserialize(deserializer)? {
        Value::Array(entries) => entries,
        _ => return Ok(Vec::new()),
    };
    Ok(entries
        .into_iter()
        .map(|entry| serde_json::from_value::<InstanceRecord>(entry).unwrap_or_default())
        .collect())
}

/// One `resources[]` block of a Terraform state document
#[derive(Debug, Clone, Deserialize)]
pub struct RawResourceRecord {
    #[serde(rename = "type", default = "unknown", deserialize_with = "lenient_text")]
    pub resource_type: String,
    #[serde(default = "unknown", deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default = "unknown", deserialize_with = "lenient_text")]
    pub provider: String,
    #[serde(default, deserialize_with = "lenient_instances")]
    pub instances: Vec<InstanceRecord>,
}

/// One deployed instance of a resource
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstanceRecord {
    #[serde(default, deserialize_with = "lenient_attributes")]
    pub attributes: Attributes,
}

impl InstanceRecord {
    pub fn new(attributes: Attributes) -> Self {
        Self { attributes }
    }

    /// Returns the attribute value, treating JSON `null` as absent
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key).filter(|v| !v.is_null())
    }

    /// Returns the attribute rendered as text.
    ///
    /// Strings are returned as-is; other scalars and containers are rendered
    /// as their JSON text.
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// First present attribute among `keys`, rendered as text, else `"N/A"`
    pub fn text_or_na(&self, keys: &[&str]) -> String {
        keys.iter()
            .find_map(|key| self.text(key))
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// Returns the attribute as a boolean, `false` when absent or not a boolean
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Returns a nested configuration block in canonical form.
    ///
    /// Terraform providers serialize single nested blocks either as a
    /// one-element list (`[{..}]`) or as a bare object (`{..}`). Both shapes
    /// collapse to the inner object here. Empty lists, empty objects and any
    /// other shape yield `None`.
    pub fn block(&self, key: &str) -> Option<&Map<String, Value>> {
        let object = match self.get(key)? {
            Value::Array(items) => items.first()?.as_object()?,
            Value::Object(object) => object,
            _ => return None,
        };
        (!object.is_empty()).then_some(object)
    }

    /// Returns a mapping attribute (tags, labels), empty when absent
    pub fn mapping(&self, key: &str) -> Value {
        match self.get(key) {
            Some(value @ Value::Object(_)) => value.clone(),
            _ => Value::Object(Map::new()),
        }
    }
}
