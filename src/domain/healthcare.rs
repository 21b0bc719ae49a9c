//! Patients and the prescriptions issued to them.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::identity::Identity;
use crate::repository::{Find, RepositoryResult, TypedRepository};
use crate::Entity;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Entity)]
pub struct Patient {
    pub id: Identity,
    pub name: String,
    pub age: u32,
    pub gender: String,
}

impl Patient {
    pub fn new(id: Identity, name: impl Into<String>, age: u32, gender: impl Into<String>) -> Self {
        Patient {
            id,
            name: name.into(),
            age,
            gender: gender.into(),
        }
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Age: {}, Gender: {}",
            self.id, self.name, self.age, self.gender
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Entity)]
pub struct Prescription {
    pub id: Identity,
    pub patient_id: Identity,
    pub medication: String,
    pub date_issued: NaiveDate,
}

impl Prescription {
    pub fn new(
        id: Identity,
        patient_id: Identity,
        medication: impl Into<String>,
        date_issued: NaiveDate,
    ) -> Self {
        Prescription {
            id,
            patient_id,
            medication: medication.into(),
            date_issued,
        }
    }
}

impl fmt::Display for Prescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Prescription ID: {}, Patient ID: {}, Medication: {}, Date: {}",
            self.id,
            self.patient_id,
            self.medication,
            self.date_issued.format("%Y-%m-%d")
        )
    }
}

/// Patient and prescription repositories side by side.
///
/// Prescriptions reference patients by identity only; a prescription for an
/// unknown patient is stored as-is.
#[derive(Default)]
pub struct HealthSystem {
    patients: TypedRepository<Patient>,
    prescriptions: TypedRepository<Prescription>,
}

impl HealthSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn patients(&self) -> &TypedRepository<Patient> {
        &self.patients
    }

    pub fn prescriptions(&self) -> &TypedRepository<Prescription> {
        &self.prescriptions
    }

    pub fn admit(&mut self, patient: Patient) -> RepositoryResult<()> {
        self.patients.add(patient)
    }

    pub fn prescribe(&mut self, prescription: Prescription) -> RepositoryResult<()> {
        self.prescriptions.add(prescription)
    }

    pub fn discharge(&mut self, patient_id: Identity) -> RepositoryResult<Patient> {
        self.patients.remove(patient_id)
    }

    /// Group every prescription by the patient it was issued to.
    pub fn prescriptions_by_patient(&self) -> BTreeMap<Identity, Vec<Prescription>> {
        let mut map: BTreeMap<Identity, Vec<Prescription>> = BTreeMap::new();
        for prescription in &self.prescriptions {
            map.entry(prescription.patient_id)
                .or_default()
                .push(prescription.clone());
        }
        map
    }

    /// Prescriptions issued to one patient, in the order they were recorded.
    pub fn prescriptions_for(&self, patient_id: Identity) -> Vec<Prescription> {
        self.prescriptions
            .find(|prescription| prescription.patient_id == patient_id)
    }
}
