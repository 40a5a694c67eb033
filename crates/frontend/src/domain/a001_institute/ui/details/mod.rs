pub mod page;
pub mod tabs;
pub mod view_model;

pub use page::InstituteDetail;
