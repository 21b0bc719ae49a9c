//! Small record-keeping domains built on [`TypedRepository`](crate::TypedRepository).

pub mod finance;
pub mod healthcare;
pub mod inventory;
pub mod warehouse;
