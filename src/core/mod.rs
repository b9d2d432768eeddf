pub mod pipeline;
pub mod query;
pub mod specialty;
pub mod stages;
pub mod store;

pub use crate::domain::model::{AdmissionState, Appointment, Specialty, Verdict, VetoReason};
pub use crate::domain::ports::AdmissionStage;
pub use crate::utils::error::Result;
