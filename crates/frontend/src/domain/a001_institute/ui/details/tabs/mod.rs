pub mod contact;
pub mod facilities;
pub mod overview;
pub mod programs;

pub use contact::ContactTab;
pub use facilities::FacilitiesTab;
pub use overview::OverviewTab;
pub use programs::ProgramsTab;
