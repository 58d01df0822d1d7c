use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use crate::error::{FieldError, Reason, ValidationError};

/// Pulls typed fields out of a JSON object, recording every failure instead
/// of stopping at the first one. Getters hand back a placeholder on failure;
/// `finish` discards the record if anything was recorded.
pub(crate) struct Fields<'a> {
    map: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(value: &'a Value) -> Result<Self, ValidationError> {
        let Some(map) = value.as_object() else {
            return Err(ValidationError::single("body", Reason::NotAnObject));
        };

        Ok(Self {
            map,
            errors: vec![],
        })
    }

    pub(crate) fn required_str(&mut self, name: &str) -> String {
        match self.map.get(name) {
            None => {
                self.reject(name, Reason::Missing);
                String::new()
            }
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                self.reject(name, Reason::WrongType("a string"));
                String::new()
            }
        }
    }

    pub(crate) fn optional_str(&mut self, name: &str) -> Option<String> {
        match self.present(name)? {
            Value::String(s) => Some(s.clone()),
            _ => {
                self.reject(name, Reason::WrongType("a string"));
                None
            }
        }
    }

    pub(crate) fn optional_number(&mut self, name: &str) -> Option<f64> {
        let number = self.present(name)?.as_f64();
        if number.is_none() {
            self.reject(name, Reason::WrongType("a number"));
        }
        number
    }

    /// Positive integers past `i64::MAX` saturate so range checks name them.
    pub(crate) fn optional_integer(&mut self, name: &str) -> Option<i64> {
        let value = self.present(name)?;
        let integer = value
            .as_i64()
            .or_else(|| value.as_u64().map(|_| i64::MAX));
        if integer.is_none() {
            self.reject(name, Reason::WrongType("an integer"));
        }
        integer
    }

    pub(crate) fn bool_or(&mut self, name: &str, default: bool) -> bool {
        match self.map.get(name) {
            None => default,
            Some(Value::Bool(b)) => *b,
            Some(_) => {
                self.reject(name, Reason::WrongType("a boolean"));
                default
            }
        }
    }

    pub(crate) fn str_list(&mut self, name: &str) -> Vec<String> {
        let Some(value) = self.map.get(name) else {
            return vec![];
        };

        let items: Option<Vec<String>> = value.as_array().and_then(|items| {
            items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect()
        });

        items.unwrap_or_else(|| {
            self.reject(name, Reason::WrongType("an array of strings"));
            vec![]
        })
    }

    pub(crate) fn optional_timestamp(
        &mut self,
        name: &str,
    ) -> Option<DateTime<Utc>> {
        let value = self.present(name)?;
        let timestamp = match value {
            Value::String(s) => parse_timestamp(s),
            // extended JSON as handed back by the document store
            Value::Object(map) => match map.get("$date") {
                Some(Value::String(s)) => parse_timestamp(s),
                Some(Value::Object(long)) => long
                    .get("$numberLong")
                    .and_then(Value::as_str)
                    .and_then(|ms| ms.parse::<i64>().ok())
                    .and_then(DateTime::from_timestamp_millis),
                _ => None,
            },
            _ => None,
        };

        if timestamp.is_none() {
            self.reject(name, Reason::WrongType("a timestamp"));
        }
        timestamp
    }

    pub(crate) fn check(&mut self, name: &str, ok: bool, reason: Reason) {
        if !ok {
            self.reject(name, reason);
        }
    }

    pub(crate) fn finish<T>(self, record: T) -> Result<T, ValidationError> {
        if self.errors.is_empty() {
            Ok(record)
        } else {
            Err(ValidationError::new(self.errors))
        }
    }

    /// Missing and null both read as absent.
    fn present(&self, name: &str) -> Option<&'a Value> {
        self.map.get(name).filter(|value| !value.is_null())
    }

    fn reject(&mut self, name: &str, reason: Reason) {
        self.errors.push(FieldError {
            field: name.to_string(),
            reason,
        });
    }
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(s) {
        return Some(timestamp.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
