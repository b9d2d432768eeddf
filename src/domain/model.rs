use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;
use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A scheduled visit. Immutable once constructed; conflict checks compare
/// the (practitioner, scheduled_at) and (patient, scheduled_at) pairs, not
/// record identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub patient: String,
    pub practitioner: String,
    pub scheduled_at: NaiveDateTime,
}

impl Appointment {
    /// Build a validated appointment. Identifiers must be non-empty and the
    /// moment is truncated to minute precision.
    pub fn new(patient: &str, practitioner: &str, scheduled_at: NaiveDateTime) -> Result<Self> {
        validate_non_empty_string("patient", patient)?;
        validate_non_empty_string("practitioner", practitioner)?;

        let scheduled_at = scheduled_at
            .with_second(0)
            .and_then(|m| m.with_nanosecond(0))
            .unwrap_or(scheduled_at);

        Ok(Self {
            patient: patient.trim().to_string(),
            practitioner: practitioner.trim().to_string(),
            scheduled_at,
        })
    }

    /// True when `other` would double-book this appointment's practitioner.
    pub fn same_practitioner_slot(&self, other: &Appointment) -> bool {
        self.practitioner == other.practitioner && self.scheduled_at == other.scheduled_at
    }

    /// True when `other` would double-book this appointment's patient.
    pub fn same_patient_slot(&self, other: &Appointment) -> bool {
        self.patient == other.patient && self.scheduled_at == other.scheduled_at
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} with Dr. {} at {}",
            self.patient,
            self.practitioner,
            self.scheduled_at.format("%Y-%m-%d %H:%M")
        )
    }
}

/// Why a candidate was refused. Display carries the human-readable trace
/// text; callers that only care about pass/fail can ignore the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VetoReason {
    PractitionerBusy {
        practitioner: String,
        scheduled_at: NaiveDateTime,
    },
    PatientDoubleBooked {
        patient: String,
        scheduled_at: NaiveDateTime,
    },
}

impl fmt::Display for VetoReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VetoReason::PractitionerBusy {
                practitioner,
                scheduled_at,
            } => write!(
                f,
                "Dr. {} is not available at {}",
                practitioner,
                scheduled_at.format("%Y-%m-%d %H:%M")
            ),
            VetoReason::PatientDoubleBooked {
                patient,
                scheduled_at,
            } => write!(
                f,
                "patient {} already has an appointment at {}",
                patient,
                scheduled_at.format("%Y-%m-%d %H:%M")
            ),
        }
    }
}

/// Result of one stage evaluation. `Pass` forwards to the next stage,
/// `Veto` halts the pipeline, `Commit` marks the terminal stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Veto(VetoReason),
    Commit,
}

/// Admission state machine. `Pending` is the initial state; `Vetoed` and
/// `Committed` are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionState {
    Pending,
    Vetoed(VetoReason),
    Committed,
}

impl AdmissionState {
    pub fn is_admitted(&self) -> bool {
        matches!(self, AdmissionState::Committed)
    }
}

/// Medical specialty selecting which booking desk confirms an admitted
/// appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specialty {
    Dentistry,
    Cardiology,
}

impl Specialty {
    pub fn name(&self) -> &'static str {
        match self {
            Specialty::Dentistry => "dentistry",
            Specialty::Cardiology => "cardiology",
        }
    }
}

impl FromStr for Specialty {
    type Err = crate::utils::error::AdmitError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().trim() {
            "dentistry" => Ok(Specialty::Dentistry),
            "cardiology" => Ok(Specialty::Cardiology),
            other => Err(crate::utils::error::AdmitError::InvalidFieldError {
                field: "specialty".to_string(),
                value: other.to_string(),
                reason: "must be one of: dentistry, cardiology".to_string(),
            }),
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
