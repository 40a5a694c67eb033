pub mod aggregate;
pub mod dto;

pub use aggregate::{Institute, Ranking};
