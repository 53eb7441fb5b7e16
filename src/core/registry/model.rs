use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

/// Value stored under a project setting key. Any JSON value fits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<SettingValue>),
    Map(BTreeMap<String, SettingValue>),
}

impl SettingValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SettingValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            SettingValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Ints widen to floats here, the other way round never happens.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            SettingValue::Float(v) => Some(*v),
            SettingValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[SettingValue]> {
        match self {
            SettingValue::List(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, SettingValue>> {
        match self {
            SettingValue::Map(v) => Some(v),
            _ => None,
        }
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::String(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::String(value)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Int(value)
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        SettingValue::Float(value)
    }
}

impl From<Vec<SettingValue>> for SettingValue {
    fn from(value: Vec<SettingValue>) -> Self {
        SettingValue::List(value)
    }
}

impl From<BTreeMap<String, SettingValue>> for SettingValue {
    fn from(value: BTreeMap<String, SettingValue>) -> Self {
        SettingValue::Map(value)
    }
}

/// Strings print bare, lists and maps print as JSON.
impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Null => f.write_str("null"),
            SettingValue::Bool(v) => write!(f, "{v}"),
            SettingValue::Int(v) => write!(f, "{v}"),
            SettingValue::Float(v) => write!(f, "{v}"),
            SettingValue::String(v) => f.write_str(v),
            SettingValue::List(_) | SettingValue::Map(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_json_picks_narrowest_variant() {
        let values: Vec<SettingValue> =
            serde_json::from_str(r#"[true, 12, 1.5, "book"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                SettingValue::Bool(true),
                SettingValue::Int(12),
                SettingValue::Float(1.5),
                SettingValue::String("book".to_string()),
            ]
        );
    }

    #[test]
    fn test_null_list_and_map_round_trip() {
        let json = r#"{"cover":null,"fonts":["Charis",12],"margins":{"bottom":48.5,"top":36}}"#;
        let values: BTreeMap<String, SettingValue> = serde_json::from_str(json).unwrap();

        assert!(values["cover"].is_null());
        assert_eq!(
            values["fonts"],
            SettingValue::List(vec![SettingValue::from("Charis"), SettingValue::Int(12)])
        );
        let margins = values["margins"].as_map().unwrap();
        assert_eq!(margins["top"], SettingValue::Int(36));
        assert_eq!(margins["bottom"], SettingValue::Float(48.5));

        assert_eq!(serde_json::to_string(&values).unwrap(), json);
    }

    #[test]
    fn test_display() {
        assert_eq!(SettingValue::from("book").to_string(), "book");
        assert_eq!(SettingValue::Null.to_string(), "null");
        let list = SettingValue::from(vec![SettingValue::from(true), SettingValue::from("a")]);
        assert_eq!(list.to_string(), r#"[true,"a"]"#);
    }

    #[test]
    fn test_accessors_only_match_their_variant() {
        let value = SettingValue::from("book");
        assert_eq!(value.as_str(), Some("book"));
        assert_eq!(value.as_bool(), None);
        assert_eq!(SettingValue::from(3i64).as_float(), Some(3.0));
        assert_eq!(SettingValue::from(2.5).as_int(), None);
    }
}
