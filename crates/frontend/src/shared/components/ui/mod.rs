pub mod badge;
pub mod select;

pub use badge::Badge;
pub use select::FacetSelect;
