use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use super::payload::FormKind;
use crate::core::Result;

/// A form as a user might have filled it in, ready to be replayed
///
/// Values may be JSON strings or numbers; both end up as the raw text the
/// form would have held.
#[derive(Debug, Clone, Deserialize)]
pub struct FormDraft {
    pub form: FormKind,
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
    #[serde(default)]
    pub line_items: Vec<BTreeMap<String, Value>>,
}

impl FormDraft {
    /// Read a draft from a JSON file, or from stdin when no path is given
    pub fn read(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_reader(std::fs::File::open(path)?),
            None => Self::from_reader(std::io::stdin().lock()),
        }
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Render a JSON value the way it would appear in a text input
pub fn input_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        other => other.to_string(),
    }
}
