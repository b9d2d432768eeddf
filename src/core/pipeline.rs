use crate::core::stages::{AvailabilityStage, CommitStage, PatientConflictStage};
use crate::core::store::AppointmentStore;
use crate::domain::model::{AdmissionState, Appointment, Verdict};
use crate::domain::ports::AdmissionStage;

/// Ordered admission pipeline. Owns its stages and iterates them
/// imperatively; a veto halts the run and later stages never see the
/// candidate. The pipeline holds no state between candidates, so one
/// pipeline can serve any number of `admit` calls.
pub struct AdmissionPipeline {
    stages: Vec<Box<dyn AdmissionStage>>,
}

impl AdmissionPipeline {
    pub fn new(stages: Vec<Box<dyn AdmissionStage>>) -> Self {
        Self { stages }
    }

    /// The standard admission order: practitioner availability, then
    /// patient conflict, then commit.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(AvailabilityStage),
            Box::new(PatientConflictStage),
            Box::new(CommitStage),
        ])
    }

    /// Run the candidate through every stage until one vetoes or the
    /// commit stage registers it. Synchronous and final: a vetoed
    /// candidate is discarded, there is no retry.
    pub fn admit(&self, candidate: &Appointment, store: &mut AppointmentStore) -> AdmissionState {
        tracing::info!("processing admission for {}", candidate);

        let mut state = AdmissionState::Pending;
        for stage in &self.stages {
            match stage.evaluate(candidate, store) {
                Verdict::Pass => continue,
                Verdict::Veto(reason) => {
                    state = AdmissionState::Vetoed(reason);
                    break;
                }
                Verdict::Commit => {
                    state = AdmissionState::Committed;
                    break;
                }
            }
        }

        state
    }
}

impl Default for AdmissionPipeline {
    fn default() -> Self {
        Self::standard()
    }
}
