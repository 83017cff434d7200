use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::error::Error;

pub type Identifier = String;
/// Possibly dotted column reference; each dot-separated segment is an
/// independently quoted identifier.
pub type ColumnRef = Identifier;

/// A runtime value that can be embedded in query text as a literal.
/// Anything else (booleans, arrays, objects) is rejected at the
/// conversion boundary.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "JsonValue")]
pub enum ScalarValue {
    String(String),
    Integer(i64),
    Float(f64),
    Null,
}

impl TryFrom<JsonValue> for ScalarValue {
    type Error = Error;

    fn try_from(value: JsonValue) -> Result<Self, Error> {
        match value {
            JsonValue::Null => Ok(Self::Null),
            JsonValue::String(s) => Ok(Self::String(s)),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Self::Integer(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Self::Float(f))
                } else {
                    Err(Error::UnsupportedValueType("number".to_owned()))
                }
            }
            JsonValue::Bool(_) => Err(Error::UnsupportedValueType("boolean".to_owned())),
            JsonValue::Array(_) => Err(Error::UnsupportedValueType("array".to_owned())),
            JsonValue::Object(_) => Err(Error::UnsupportedValueType("object".to_owned())),
        }
    }
}

/// One matching rule identifying rows to delete.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "Type")]
pub enum MatchGroup {
    /// Single-column identity match.
    Simple {
        #[serde(rename = "Column")]
        column: ColumnRef,
        #[serde(rename = "MatchIds")]
        match_ids: Vec<ScalarValue>,
    },
    /// Multi-column identity match, compared through a concatenated and
    /// delimited expression. Every entry must have one value per column.
    Composite {
        #[serde(rename = "Columns")]
        columns: Vec<ColumnRef>,
        #[serde(rename = "MatchIds")]
        match_ids: Vec<Vec<ScalarValue>>,
    },
}

/// Equality filter over a physical partition key, ANDed into the query.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PartitionConstraint {
    #[serde(rename = "Key")]
    pub key: ColumnRef,
    #[serde(rename = "Value")]
    pub value: ScalarValue,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct QuerySpec {
    #[serde(rename = "Database")]
    pub database: Identifier,
    #[serde(rename = "Table")]
    pub table: Identifier,
    #[serde(rename = "Columns")]
    pub match_groups: Vec<MatchGroup>,
    #[serde(rename = "PartitionKeys", default)]
    pub partition_constraints: Vec<PartitionConstraint>,
}

impl QuerySpec {
    /// Shape checks serde cannot express. The builder itself trusts its
    /// input; specs arriving from outside the process go through here
    /// first.
    pub fn validate(&self) -> Result<(), Error> {
        for group in &self.match_groups {
            if let MatchGroup::Composite { columns, match_ids } = group {
                if columns.is_empty() {
                    return Err(Error::MalformedSpec(
                        "composite match group has no columns".to_owned(),
                    ));
                }
                for entry in match_ids {
                    if entry.len() != columns.len() {
                        return Err(Error::MalformedSpec(format!(
                            "composite match entry has {} values for {} columns",
                            entry.len(),
                            columns.len()
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}
