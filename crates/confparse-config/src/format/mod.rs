//! Input formats and how a source is mapped to one

use std::fmt;
use std::str::FromStr;

use camino::Utf8Path;
use confparse_core::types::Document;

use crate::ConfigResult;

/// Structured-data formats a source can be parsed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputFormat {
    Json,
    Toml,
    Yaml,
}

impl InputFormat {
    /// Every supported format, in help-text order
    pub const ALL: [InputFormat; 3] = [InputFormat::Json, InputFormat::Toml, InputFormat::Yaml];

    /// Canonical hint name
    pub fn name(self) -> &'static str {
        match self {
            InputFormat::Json => "json",
            InputFormat::Toml => "toml",
            InputFormat::Yaml => "yaml",
        }
    }

    /// Pick a format from a file extension, if it is a known one
    pub fn from_path(path: &Utf8Path) -> Option<Self> {
        let extension = path.extension()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(InputFormat::Json),
            "toml" => Some(InputFormat::Toml),
            "yaml" | "yml" => Some(InputFormat::Yaml),
            _ => None,
        }
    }

    /// Parse source content in this format
    pub fn parse(self, source_id: &str, content: &str) -> ConfigResult<Document> {
        match self {
            InputFormat::Json => crate::json::parse(source_id, content),
            InputFormat::Toml => crate::toml::parse(source_id, content),
            InputFormat::Yaml => crate::yaml::parse(source_id, content),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(InputFormat::Json),
            "toml" => Ok(InputFormat::Toml),
            "yaml" | "yml" => Ok(InputFormat::Yaml),
            other => Err(format!(
                "unknown input format '{}', valid options are: {}",
                other,
                valid_inputs().join(", ")
            )),
        }
    }
}

/// Accepted values for the input hint, for help text
pub fn valid_inputs() -> Vec<&'static str> {
    InputFormat::ALL.iter().map(|format| format.name()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(InputFormat::from_path(Utf8Path::new("a.json")), Some(InputFormat::Json));
        assert_eq!(
            InputFormat::from_path(Utf8Path::new("dir/Cargo.toml")),
            Some(InputFormat::Toml)
        );
        assert_eq!(InputFormat::from_path(Utf8Path::new("deploy.yml")), Some(InputFormat::Yaml));
        assert_eq!(InputFormat::from_path(Utf8Path::new("DEPLOY.YAML")), Some(InputFormat::Yaml));
        assert_eq!(InputFormat::from_path(Utf8Path::new("Dockerfile")), None);
        assert_eq!(InputFormat::from_path(Utf8Path::new("notes.txt")), None);
        assert_eq!(InputFormat::from_path(Utf8Path::new("-")), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("json".parse::<InputFormat>(), Ok(InputFormat::Json));
        assert_eq!("TOML".parse::<InputFormat>(), Ok(InputFormat::Toml));
        assert_eq!("yml".parse::<InputFormat>(), Ok(InputFormat::Yaml));

        let err = "hcl".parse::<InputFormat>().unwrap_err();
        assert!(err.contains("hcl"));
        assert!(err.contains("json, toml, yaml"));
    }

    #[test]
    fn test_valid_inputs_round_trip_through_from_str() {
        let inputs = valid_inputs();
        assert_eq!(inputs, vec!["json", "toml", "yaml"]);
        for input in inputs {
            let format: InputFormat = input.parse().unwrap();
            assert_eq!(format.to_string(), input);
        }
    }
}
