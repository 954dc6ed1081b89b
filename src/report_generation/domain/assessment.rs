use crate::shared::Result;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Compliance frameworks the assessment service may report on, in the order
/// every report iterates them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameworkKey {
    Nist80053,
    Nist800171,
    Nist800172,
    Cmmc,
    Fips1402,
    Fips1403,
}

impl FrameworkKey {
    pub const ALL: [FrameworkKey; 6] = [
        FrameworkKey::Nist80053,
        FrameworkKey::Nist800171,
        FrameworkKey::Nist800172,
        FrameworkKey::Cmmc,
        FrameworkKey::Fips1402,
        FrameworkKey::Fips1403,
    ];

    /// Key used in the `assessment` object of the service response
    pub fn as_key(&self) -> &'static str {
        match self {
            FrameworkKey::Nist80053 => "nist_800_53",
            FrameworkKey::Nist800171 => "nist_800_171",
            FrameworkKey::Nist800172 => "nist_800_172",
            FrameworkKey::Cmmc => "cmmc",
            FrameworkKey::Fips1402 => "fips_140_2",
            FrameworkKey::Fips1403 => "fips_140_3",
        }
    }

    /// Human-readable name: the key uppercased with underscores as spaces
    pub fn display_name(&self) -> String {
        self.as_key().to_uppercase().replace('_', " ")
    }
}

/// Assessment status of a single control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlStatus {
    Satisfied,
    NotSatisfied,
    NotApplicable,
    #[default]
    Unknown,
}

impl ControlStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlStatus::Satisfied => "satisfied",
            ControlStatus::NotSatisfied => "not-satisfied",
            ControlStatus::NotApplicable => "not-applicable",
            ControlStatus::Unknown => "unknown",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "satisfied" => ControlStatus::Satisfied,
            "not-satisfied" => ControlStatus::NotSatisfied,
            "not-applicable" => ControlStatus::NotApplicable,
            _ => ControlStatus::Unknown,
        }
    }
}

impl fmt::Display for ControlStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ControlStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ControlStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(value
            .as_str()
            .map(ControlStatus::parse)
            .unwrap_or(ControlStatus::Unknown))
    }
}

/// Field deserializers that never fail on an unexpected JSON type.
/// A mistyped field degrades to its default instead of rejecting the record.
mod lenient {
    use super::{ControlRecord, ControlSummary};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        })
    }

    pub fn count<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(value
            .as_u64()
            .or_else(|| value.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0))
    }

    pub fn optional_count<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
        Ok(Value::deserialize(d)?.as_u64())
    }

    pub fn texts<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => items
                .into_iter()
                .filter(|v| !v.is_null())
                .map(|v| match v {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect(),
            _ => Vec::new(),
        })
    }

    pub fn summary<'de, D: Deserializer<'de>>(d: D) -> Result<ControlSummary, D::Error> {
        Ok(serde_json::from_value(Value::deserialize(d)?).unwrap_or_default())
    }

    pub fn controls<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<ControlRecord>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|v| serde_json::from_value(v).ok())
                .collect(),
            _ => Vec::new(),
        })
    }
}

/// One assessed control
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ControlRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub control_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default)]
    pub status: ControlStatus,
    #[serde(default, deserialize_with = "lenient::texts")]
    pub findings: Vec<String>,
    #[serde(default, deserialize_with = "lenient::texts")]
    pub evidence: Vec<String>,
}

impl ControlRecord {
    pub fn control_id(&self) -> &str {
        self.control_id.as_deref().unwrap_or("N/A")
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("N/A")
    }
}

/// Control counts reported by the service for one framework
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ControlSummary {
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_controls: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub satisfied: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub not_satisfied: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub not_applicable: u64,
}

impl ControlSummary {
    /// `satisfied / total * 100`, or 0 when there are no controls
    pub fn compliance_percentage(&self) -> f64 {
        if self.total_controls == 0 {
            return 0.0;
        }
        self.satisfied as f64 / self.total_controls as f64 * 100.0
    }
}

/// Assessment results for a single framework
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComplianceAssessmentView {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "lenient::summary")]
    pub summary: ControlSummary,
    #[serde(default, deserialize_with = "lenient::controls")]
    pub controls: Vec<ControlRecord>,
}

impl ComplianceAssessmentView {
    /// Parses a view, degrading to an empty view when `value` is not an object
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or("Unknown")
    }
}

/// File produced by the assessment service (OSCAL export, diagram, report)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtifactDescriptor {
    #[serde(default, deserialize_with = "lenient::text")]
    pub filename: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub content_base64: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub size_bytes: Option<u64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub diagram: Option<String>,
}

/// Response of the evidence service for one Terraform assessment
#[derive(Debug, Clone)]
pub struct AssessmentResponse {
    pub id: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    /// Framework key -> view, or (older shape) a single view at top level
    pub assessment: Map<String, Value>,
    pub artifacts: Vec<ArtifactDescriptor>,
    raw: Value,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default, deserialize_with = "lenient::text")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    status: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    created_at: Option<String>,
    #[serde(default)]
    assessment: Value,
    #[serde(default)]
    artifacts: Value,
}

impl AssessmentResponse {
    /// Interprets a decoded service response.
    ///
    /// # Errors
    /// Returns an error only when the response is not a JSON object at all
    pub fn from_value(raw: Value) -> Result<Self> {
        if !raw.is_object() {
            anyhow::bail!("Assessment response is not a JSON object");
        }
        let envelope: Envelope = serde_json::from_value(raw.clone())?;

        let assessment = match envelope.assessment {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        let artifacts = match envelope.artifacts {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|v| serde_json::from_value(v).ok())
                .collect(),
            _ => Vec::new(),
        };

        Ok(Self {
            id: envelope.id,
            status: envelope.status,
            created_at: envelope.created_at,
            assessment,
            artifacts,
            raw,
        })
    }

    /// The response exactly as received
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn id_or_na(&self) -> &str {
        self.id.as_deref().unwrap_or("N/A")
    }

    /// Recognized frameworks present in the response, in `FrameworkKey::ALL` order
    pub fn present_frameworks(&self) -> Vec<(FrameworkKey, ComplianceAssessmentView)> {
        FrameworkKey::ALL
            .iter()
            .filter_map(|key| {
                self.assessment
                    .get(key.as_key())
                    .map(|value| (*key, ComplianceAssessmentView::from_value(value)))
            })
            .collect()
    }
}
