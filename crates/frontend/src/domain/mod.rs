pub mod a001_institute;
pub mod a002_admission;
pub mod a003_test;
pub mod a004_blog;
