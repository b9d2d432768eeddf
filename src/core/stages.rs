use crate::core::store::AppointmentStore;
use crate::domain::model::{Appointment, Verdict, VetoReason};
use crate::domain::ports::AdmissionStage;

/// Vetoes the candidate when its practitioner already has a committed
/// appointment at the same moment. Read-only; evaluating twice on the
/// same store yields the same verdict.
pub struct AvailabilityStage;

impl AdmissionStage for AvailabilityStage {
    fn name(&self) -> &'static str {
        "practitioner-availability"
    }

    fn evaluate(&self, candidate: &Appointment, store: &mut AppointmentStore) -> Verdict {
        let busy = store.iter().any(|existing| existing.same_practitioner_slot(candidate));

        if busy {
            let reason = VetoReason::PractitionerBusy {
                practitioner: candidate.practitioner.clone(),
                scheduled_at: candidate.scheduled_at,
            };
            tracing::warn!(stage = self.name(), "veto: {}", reason);
            return Verdict::Veto(reason);
        }

        tracing::info!(
            stage = self.name(),
            "Dr. {} is free at {}",
            candidate.practitioner,
            candidate.scheduled_at.format("%Y-%m-%d %H:%M")
        );
        Verdict::Pass
    }
}

/// Vetoes the candidate when its patient already has a committed
/// appointment at the same moment, regardless of practitioner.
pub struct PatientConflictStage;

impl AdmissionStage for PatientConflictStage {
    fn name(&self) -> &'static str {
        "patient-conflict"
    }

    fn evaluate(&self, candidate: &Appointment, store: &mut AppointmentStore) -> Verdict {
        let double_booked = store.iter().any(|existing| existing.same_patient_slot(candidate));

        if double_booked {
            let reason = VetoReason::PatientDoubleBooked {
                patient: candidate.patient.clone(),
                scheduled_at: candidate.scheduled_at,
            };
            tracing::warn!(stage = self.name(), "veto: {}", reason);
            return Verdict::Veto(reason);
        }

        tracing::info!(
            stage = self.name(),
            "patient {} has no clash at {}",
            candidate.patient,
            candidate.scheduled_at.format("%Y-%m-%d %H:%M")
        );
        Verdict::Pass
    }
}

/// Terminal stage: appends the candidate to the store unconditionally.
/// Earlier stages are responsible for having established the conflict
/// invariants by the time this runs.
pub struct CommitStage;

impl AdmissionStage for CommitStage {
    fn name(&self) -> &'static str {
        "commit"
    }

    fn evaluate(&self, candidate: &Appointment, store: &mut AppointmentStore) -> Verdict {
        store.commit(candidate.clone());
        tracing::info!(stage = self.name(), "appointment registered: {}", candidate);
        Verdict::Commit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn moment(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 12)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn apt(patient: &str, practitioner: &str, hour: u32) -> Appointment {
        Appointment::new(patient, practitioner, moment(hour)).unwrap()
    }

    #[test]
    fn test_availability_vetoes_booked_practitioner() {
        let mut store = AppointmentStore::new();
        store.commit(apt("Ana", "Pérez", 10));

        let candidate = apt("Juan", "Pérez", 10);
        let verdict = AvailabilityStage.evaluate(&candidate, &mut store);

        assert_eq!(
            verdict,
            Verdict::Veto(VetoReason::PractitionerBusy {
                practitioner: "Pérez".to_string(),
                scheduled_at: moment(10),
            })
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_availability_passes_free_practitioner() {
        let mut store = AppointmentStore::new();
        store.commit(apt("Ana", "Pérez", 10));

        // Same practitioner, different moment.
        let candidate = apt("Juan", "Pérez", 11);
        assert_eq!(AvailabilityStage.evaluate(&candidate, &mut store), Verdict::Pass);

        // Same moment, different practitioner.
        let candidate = apt("Juan", "Gómez", 10);
        assert_eq!(AvailabilityStage.evaluate(&candidate, &mut store), Verdict::Pass);
    }

    #[test]
    fn test_patient_conflict_vetoes_double_booking() {
        let mut store = AppointmentStore::new();
        store.commit(apt("Ana", "Pérez", 10));

        // Ana is busy at 10:00 even with a different practitioner.
        let candidate = apt("Ana", "Gómez", 10);
        let verdict = PatientConflictStage.evaluate(&candidate, &mut store);

        assert_eq!(
            verdict,
            Verdict::Veto(VetoReason::PatientDoubleBooked {
                patient: "Ana".to_string(),
                scheduled_at: moment(10),
            })
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_patient_conflict_passes_free_patient() {
        let mut store = AppointmentStore::new();
        store.commit(apt("Ana", "Pérez", 10));

        let candidate = apt("Juan", "Gómez", 10);
        assert_eq!(
            PatientConflictStage.evaluate(&candidate, &mut store),
            Verdict::Pass
        );
    }

    #[test]
    fn test_read_only_stages_are_idempotent() {
        let mut store = AppointmentStore::new();
        store.commit(apt("Ana", "Pérez", 10));
        let candidate = apt("Juan", "Pérez", 10);

        let first = AvailabilityStage.evaluate(&candidate, &mut store);
        let second = AvailabilityStage.evaluate(&candidate, &mut store);
        assert_eq!(first, second);
        assert_eq!(store.len(), 1);

        let first = PatientConflictStage.evaluate(&candidate, &mut store);
        let second = PatientConflictStage.evaluate(&candidate, &mut store);
        assert_eq!(first, second);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_commit_appends_and_terminates() {
        let mut store = AppointmentStore::new();
        let candidate = apt("Juan", "Pérez", 10);

        let verdict = CommitStage.evaluate(&candidate, &mut store);

        assert_eq!(verdict, Verdict::Commit);
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0], candidate);
    }
}
