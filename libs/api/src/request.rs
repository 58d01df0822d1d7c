use serde::{de::Error as _, Deserialize, Deserializer};
use serde_with::DeserializeAs;

/// Boolean query value: `true/false`, `1/0`, `yes/no`, `on/off`, `t/f`,
/// `y/n`, any case.
pub struct Flag;

impl<'de> DeserializeAs<'de, bool> for Flag {
    fn deserialize_as<D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_flag(&text).ok_or_else(|| {
            D::Error::custom(format!("`{text}` is not a boolean"))
        })
    }
}

fn parse_flag(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "f" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::parse_flag;

    #[test]
    fn test_parse_flag() {
        for text in ["true", "True", "TRUE", "1", "yes", "On", "t", "Y"] {
            assert_eq!(parse_flag(text), Some(true), "{text}");
        }
        for text in ["false", "False", "0", "no", "OFF", "f", "n"] {
            assert_eq!(parse_flag(text), Some(false), "{text}");
        }
        for text in ["", "maybe", "2", "truthy"] {
            assert_eq!(parse_flag(text), None, "{text}");
        }
    }
}
