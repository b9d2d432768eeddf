pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::pipeline::AdmissionPipeline;
pub use crate::core::query::{AppointmentQuery, Criterion};
pub use crate::core::specialty::BookingDesk;
pub use crate::core::store::AppointmentStore;
pub use crate::domain::model::{AdmissionState, Appointment, Specialty, Verdict, VetoReason};
pub use crate::domain::ports::AdmissionStage;
pub use crate::utils::error::{AdmitError, Result};
