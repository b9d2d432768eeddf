use clap::Parser;
use clinic_admit::utils::{logger, validation::Validate};
use clinic_admit::{
    AdmissionPipeline, AdmissionState, Appointment, AppointmentQuery, AppointmentStore,
    BookingDesk, CliConfig, Criterion,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("starting clinic-admit");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // One appointment already on the books, as in the walk-through: Ana
    // sees Dr. Pérez on 2025-05-12 at 10:00.
    let mut store = AppointmentStore::new();
    let seeded = Appointment::new(
        "Ana",
        "Pérez",
        clinic_admit::config::parse_moment("2025-05-12T10:00")?,
    )?;
    tracing::info!("pre-seeded store with: {}", seeded);
    store.commit(seeded);

    let candidate = Appointment::new(&config.patient, &config.practitioner, config.scheduled_at)?;
    let pipeline = AdmissionPipeline::standard();

    println!("Processing admission for {}", candidate);
    match pipeline.admit(&candidate, &mut store) {
        AdmissionState::Committed => {
            println!("Appointment registered: {}", candidate);

            let desk = BookingDesk::for_specialty(config.specialty);
            for line in desk.confirm(&candidate) {
                println!("{}", line);
            }
        }
        AdmissionState::Vetoed(reason) => {
            // A veto is an expected outcome, not an error; the process
            // still exits successfully.
            println!("Admission refused: {}", reason);
        }
        AdmissionState::Pending => {
            unreachable!("standard pipeline always reaches a terminal state")
        }
    }

    let booked = AppointmentQuery::new()
        .with(Criterion::Practitioner(config.practitioner.clone()))
        .with(Criterion::ScheduledAt(config.scheduled_at))
        .run(&store);
    println!(
        "Dr. {} now has {} appointment(s) at {}:",
        config.practitioner,
        booked.len(),
        config.scheduled_at.format("%Y-%m-%d %H:%M")
    );
    for appointment in booked {
        println!("  - {}", appointment);
    }

    if config.verbose {
        tracing::debug!("store dump: {}", serde_json::to_string_pretty(&store)?);
    }

    Ok(())
}
