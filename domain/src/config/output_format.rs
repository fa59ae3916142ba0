//! Output format value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// How a comparison round is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Two side-by-side columns (default)
    #[default]
    Columns,
    /// One provider after the other, for narrow terminals
    Stacked,
    /// JSON snapshot of both sessions
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "columns" | "side-by-side" => Ok(Self::Columns),
            "stacked" => Ok(Self::Stacked),
            "json" => Ok(Self::Json),
            other => Err(DomainError::UnknownOutputFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_columns() {
        assert_eq!(OutputFormat::default(), OutputFormat::Columns);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Stacked).unwrap();
        assert_eq!(json, "\"stacked\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("table".parse::<OutputFormat>().is_err());
        assert_eq!("Columns".parse::<OutputFormat>().unwrap(), OutputFormat::Columns);
    }
}
