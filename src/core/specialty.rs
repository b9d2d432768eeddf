use crate::domain::model::{Appointment, Specialty};
use crate::domain::ports::{ReminderNotifier, SlotScheduler, SpecialtyFactory};

struct DentistryScheduler;

impl SlotScheduler for DentistryScheduler {
    fn schedule(&self, appointment: &Appointment) -> String {
        format!(
            "dentistry visit for {} booked at {}",
            appointment.patient,
            appointment.scheduled_at.format("%Y-%m-%d %H:%M")
        )
    }
}

struct DentistryNotifier;

impl ReminderNotifier for DentistryNotifier {
    fn notify(&self, appointment: &Appointment) -> String {
        format!(
            "reminder sent to {} for the dentistry visit at {}",
            appointment.patient,
            appointment.scheduled_at.format("%Y-%m-%d %H:%M")
        )
    }
}

struct CardiologyScheduler;

impl SlotScheduler for CardiologyScheduler {
    fn schedule(&self, appointment: &Appointment) -> String {
        format!(
            "cardiology consultation for {} booked at {}",
            appointment.patient,
            appointment.scheduled_at.format("%Y-%m-%d %H:%M")
        )
    }
}

struct CardiologyNotifier;

impl ReminderNotifier for CardiologyNotifier {
    fn notify(&self, appointment: &Appointment) -> String {
        format!(
            "notification sent to {} for the cardiology consultation at {}",
            appointment.patient,
            appointment.scheduled_at.format("%Y-%m-%d %H:%M")
        )
    }
}

pub struct DentistryFactory;

impl SpecialtyFactory for DentistryFactory {
    fn scheduler(&self) -> Box<dyn SlotScheduler> {
        Box::new(DentistryScheduler)
    }

    fn notifier(&self) -> Box<dyn ReminderNotifier> {
        Box::new(DentistryNotifier)
    }
}

pub struct CardiologyFactory;

impl SpecialtyFactory for CardiologyFactory {
    fn scheduler(&self) -> Box<dyn SlotScheduler> {
        Box::new(CardiologyScheduler)
    }

    fn notifier(&self) -> Box<dyn ReminderNotifier> {
        Box::new(CardiologyNotifier)
    }
}

impl Specialty {
    pub fn factory(&self) -> Box<dyn SpecialtyFactory> {
        match self {
            Specialty::Dentistry => Box::new(DentistryFactory),
            Specialty::Cardiology => Box::new(CardiologyFactory),
        }
    }
}

/// Front desk for one specialty: confirms the slot, then sends the
/// reminder. Both products come from the same factory so they always
/// speak for the same specialty.
pub struct BookingDesk {
    scheduler: Box<dyn SlotScheduler>,
    notifier: Box<dyn ReminderNotifier>,
}

impl BookingDesk {
    pub fn new(factory: &dyn SpecialtyFactory) -> Self {
        Self {
            scheduler: factory.scheduler(),
            notifier: factory.notifier(),
        }
    }

    pub fn for_specialty(specialty: Specialty) -> Self {
        Self::new(specialty.factory().as_ref())
    }

    /// Confirm an admitted appointment. Returns the two trace lines in
    /// the order they were emitted.
    pub fn confirm(&self, appointment: &Appointment) -> Vec<String> {
        let booked = self.scheduler.schedule(appointment);
        tracing::info!("{}", booked);

        let notified = self.notifier.notify(appointment);
        tracing::info!("{}", notified);

        vec![booked, notified]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn apt() -> Appointment {
        Appointment::new(
            "Ana Torres",
            "Pérez",
            NaiveDate::from_ymd_opt(2025, 7, 10)
                .unwrap()
                .and_hms_opt(11, 0, 0)
                .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_dentistry_desk_speaks_dentistry() {
        let desk = BookingDesk::for_specialty(Specialty::Dentistry);
        let lines = desk.confirm(&apt());

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("dentistry"));
        assert!(lines[1].contains("dentistry"));
        assert!(lines[0].contains("Ana Torres"));
    }

    #[test]
    fn test_cardiology_desk_speaks_cardiology() {
        let desk = BookingDesk::for_specialty(Specialty::Cardiology);
        let lines = desk.confirm(&apt());

        assert!(lines[0].contains("cardiology"));
        assert!(lines[1].contains("cardiology"));
    }

    #[test]
    fn test_desk_schedules_before_notifying() {
        let desk = BookingDesk::for_specialty(Specialty::Dentistry);
        let lines = desk.confirm(&apt());

        assert!(lines[0].contains("booked"));
        assert!(lines[1].contains("reminder"));
    }
}
