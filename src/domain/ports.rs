use crate::core::store::AppointmentStore;
use crate::domain::model::{Appointment, Verdict};

/// One link of the admission pipeline. A stage inspects the candidate
/// against the store and either passes it on, vetoes it, or commits it.
/// Vetoes are terminal for the candidate; no later stage runs.
pub trait AdmissionStage {
    fn name(&self) -> &'static str;

    fn evaluate(&self, candidate: &Appointment, store: &mut AppointmentStore) -> Verdict;
}

/// Books the slot for a confirmed appointment and returns the trace line
/// describing what was booked.
pub trait SlotScheduler {
    fn schedule(&self, appointment: &Appointment) -> String;
}

/// Sends the reminder for a confirmed appointment and returns the trace
/// line describing what was sent.
pub trait ReminderNotifier {
    fn notify(&self, appointment: &Appointment) -> String;
}

/// Produces the scheduler/notifier pair for one specialty. The two
/// products are always used together by the booking desk.
pub trait SpecialtyFactory {
    fn scheduler(&self) -> Box<dyn SlotScheduler>;
    fn notifier(&self) -> Box<dyn ReminderNotifier>;
}
