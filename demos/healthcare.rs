use chrono::{Days, Local};
use typed_repo::domain::healthcare::{HealthSystem, Patient, Prescription};
use typed_repo::{default_log_level, init_logging};

fn seed(system: &mut HealthSystem) -> anyhow::Result<()> {
    system.admit(Patient::new(1, "Alice Johnson", 30, "Female"))?;
    system.admit(Patient::new(2, "Bob Smith", 45, "Male"))?;
    system.admit(Patient::new(3, "Charlie Brown", 55, "Male"))?;

    let today = Local::now().date_naive();
    for (id, patient_id, medication, days_ago) in [
        (1, 1, "Amoxicillin", 10),
        (2, 1, "Ibuprofen", 5),
        (3, 2, "Paracetamol", 7),
        (4, 3, "Metformin", 2),
        (5, 2, "Aspirin", 1),
    ] {
        let issued = today - Days::new(days_ago);
        system.prescribe(Prescription::new(id, patient_id, medication, issued))?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging(default_log_level())?;

    let mut system = HealthSystem::new();
    seed(&mut system)?;

    println!("=== All Patients ===");
    for patient in system.patients() {
        println!("{}", patient);
    }
    println!();

    let patient_id = 2;
    let by_patient = system.prescriptions_by_patient();
    match by_patient.get(&patient_id) {
        Some(prescriptions) => {
            println!("=== Prescriptions for Patient ID: {} ===", patient_id);
            for prescription in prescriptions {
                println!("{}", prescription);
            }
        }
        None => println!("No prescriptions found for Patient ID: {}", patient_id),
    }
    println!();

    Ok(())
}
