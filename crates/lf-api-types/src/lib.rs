use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;
use std::str::FromStr;

pub const FOUND_ITEMS_KEY: &str = "foundItems";
pub const LOST_ITEMS_KEY: &str = "lostItems";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Lost,
    Found,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Lost => "lost",
            ItemKind::Found => "found",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lost" => Ok(ItemKind::Lost),
            "found" => Ok(ItemKind::Found),
            other => Err(format!("unknown item type: {other}")),
        }
    }
}

/// Item identifier as stored by the backend (integer) or by older
/// local-storage entries (string).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl ItemId {
    /// Compare against the textual id taken from a URL.
    pub fn matches(&self, raw: &str) -> bool {
        let raw = raw.trim();
        match self {
            ItemId::Number(n) => raw.parse::<i64>().is_ok_and(|v| v == *n),
            ItemId::Text(s) => {
                let s = s.trim();
                s == raw
                    || matches!((s.parse::<f64>(), raw.parse::<f64>()), (Ok(a), Ok(b)) if a == b)
            }
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{n}"),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

/// A lost or found item record. Every field is optional; unknown fields are
/// kept in `extra` so a record survives a decode/encode cycle untouched.
/// Known fields holding a value of the wrong shape decode as absent (or as
/// text, for numbers in text fields) instead of failing the whole record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, deserialize_with = "lenient::id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub color_hex: Option<String>,
    #[serde(default, rename = "match", deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub match_label: Option<String>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub match_score: Option<Number>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Number>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub reported_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// True when either name field equals `name`.
    pub fn has_name(&self, name: &str) -> bool {
        self.item_name.as_deref() == Some(name) || self.name.as_deref() == Some(name)
    }

    pub fn has_id(&self, raw: &str) -> bool {
        self.id.as_ref().is_some_and(|id| id.matches(raw))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DetectedObject {
    #[serde(default, rename = "class")]
    pub class_name: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub bbox: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImageAnalysis {
    #[serde(default)]
    pub detected_objects: Vec<DetectedObject>,
    #[serde(default)]
    pub raw_result: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalyzeImageResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub filepath: String,
    #[serde(default)]
    pub analysis: ImageAnalysis,
    #[serde(default)]
    pub timestamp: String,
}

/// Body of `POST /api/report-lost` and `POST /api/report-found`.
///
/// Required fields are checked by the server, which names the first missing
/// one in its error; extra fields set by the page are forwarded as they are.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportItemRequest {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportItemResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub item: Item,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ItemListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ItemDetailResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,
}

/// Query filters accepted by the item listing endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ItemFilters {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.color.is_none()
            && self.location.is_none()
            && self.search.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemMatch {
    pub item: Item,
    #[serde(default)]
    pub match_score: u32,
    #[serde(default)]
    pub match_reasons: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub match_count: usize,
    #[serde(default)]
    pub matches: Vec<ItemMatch>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(default)]
    pub total_lost_items: u64,
    #[serde(default)]
    pub total_found_items: u64,
    #[serde(default)]
    pub active_users: u64,
    #[serde(default)]
    pub items_reunited: u64,
    #[serde(default)]
    pub success_rate: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub stats: Stats,
}

/// Error body returned by the API on non-success statuses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Field decoders that never fail on a value of the wrong shape.
mod lenient {
    use super::{Deserialize, Deserializer, ItemId, Number, Value};

    /// Strings as given; numbers and booleans as their text; anything else absent.
    pub fn text<'de, D>(de: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(de)? {
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::Bool(b)) => Some(b.to_string()),
            _ => None,
        })
    }

    /// Numbers as given, numeric strings parsed, anything else absent.
    pub fn number<'de, D>(de: D) -> Result<Option<Number>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(de)? {
            Some(Value::Number(n)) => Some(n),
            Some(Value::String(s)) => serde_json::from_str::<Number>(s.trim()).ok(),
            _ => None,
        })
    }

    /// Integer ids stay numeric; any other number or string is kept as text.
    pub fn id<'de, D>(de: D) -> Result<Option<ItemId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(de)? {
            Some(Value::Number(n)) => Some(match n.as_i64() {
                Some(i) => ItemId::Number(i),
                None => ItemId::Text(n.to_string()),
            }),
            Some(Value::String(s)) => Some(ItemId::Text(s)),
            _ => None,
        })
    }
}
