use crate::core::store::AppointmentStore;
use crate::domain::model::Appointment;
use chrono::NaiveDateTime;

/// One filter over the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    Patient(String),
    Practitioner(String),
    ScheduledAt(NaiveDateTime),
}

impl Criterion {
    pub fn matches(&self, appointment: &Appointment) -> bool {
        match self {
            Criterion::Patient(patient) => &appointment.patient == patient,
            Criterion::Practitioner(practitioner) => &appointment.practitioner == practitioner,
            Criterion::ScheduledAt(moment) => &appointment.scheduled_at == moment,
        }
    }
}

/// Query over the appointment store: all criteria must match
/// (conjunction). An empty query matches every record.
#[derive(Debug, Clone, Default)]
pub struct AppointmentQuery {
    criteria: Vec<Criterion>,
}

impl AppointmentQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    pub fn run<'a>(&self, store: &'a AppointmentStore) -> Vec<&'a Appointment> {
        store
            .iter()
            .filter(|appointment| self.criteria.iter().all(|c| c.matches(appointment)))
            .collect()
    }
}
