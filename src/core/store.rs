use crate::domain::model::Appointment;
use serde::{Deserialize, Serialize};

/// In-memory record of committed appointments. Insertion order is
/// preserved and records are append-only for the lifetime of a run.
///
/// The store itself enforces no uniqueness; keeping the conflict
/// invariants is the admission pipeline's job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentStore {
    records: Vec<Appointment>,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a committed appointment.
    pub fn commit(&mut self, appointment: Appointment) {
        self.records.push(appointment);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Appointment> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Appointment] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
