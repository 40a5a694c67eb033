pub mod api_error;
pub mod compare;
pub mod listing;
pub mod text;
