pub mod institute_type;

pub use institute_type::InstituteType;
