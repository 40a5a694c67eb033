pub mod aggregate;
pub mod dto;

pub use aggregate::{BlogPost, ShareTarget};
