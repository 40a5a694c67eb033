mod page;
mod tabs;

pub use page::AdmissionDetail;
