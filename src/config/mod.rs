use crate::domain::model::Specialty;
use crate::utils::error::{AdmitError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use chrono::NaiveDateTime;
use clap::Parser;

pub const MOMENT_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub fn parse_moment(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), MOMENT_FORMAT).map_err(|_| {
        AdmitError::MomentParseError {
            value: value.to_string(),
        }
    })
}

/// Demo CLI arguments. Defaults reproduce the walk-through scenario: the
/// store is pre-seeded with Ana's 10:00 slot and Juan asks Dr. Pérez for
/// the same moment.
#[derive(Debug, Clone, Parser)]
#[command(name = "clinic-admit")]
#[command(about = "Run a candidate appointment through the admission pipeline")]
pub struct CliConfig {
    #[arg(long, default_value = "Juan")]
    pub patient: String,

    #[arg(long, default_value = "Pérez")]
    pub practitioner: String,

    #[arg(long = "at", default_value = "2025-05-12T10:00", value_parser = parse_moment)]
    pub scheduled_at: NaiveDateTime,

    #[arg(long, default_value = "dentistry")]
    pub specialty: Specialty,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("patient", &self.patient)?;
        validate_non_empty_string("practitioner", &self.practitioner)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_moment_accepts_minute_precision() {
        let parsed = parse_moment("2025-05-12T10:00").unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2025, 5, 12)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_parse_moment_rejects_garbage() {
        assert!(parse_moment("not-a-moment").is_err());
        assert!(parse_moment("2025-05-12").is_err());
    }

    #[test]
    fn test_defaults_reproduce_demo_scenario() {
        let config = CliConfig::parse_from(["clinic-admit"]);
        assert_eq!(config.patient, "Juan");
        assert_eq!(config.practitioner, "Pérez");
        assert_eq!(config.specialty, Specialty::Dentistry);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_patient() {
        let config = CliConfig::parse_from(["clinic-admit", "--patient", "  "]);
        assert!(config.validate().is_err());
    }
}
