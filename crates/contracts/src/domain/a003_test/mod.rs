pub mod aggregate;
pub mod dto;

pub use aggregate::{
    EntryTest, ImportantDate, StructureSection, TestDiscipline, ALL_TESTS,
};
