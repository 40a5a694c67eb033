pub mod aggregate;
pub mod dto;

pub use aggregate::{Admission, AdmissionStatus};
