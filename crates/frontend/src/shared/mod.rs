pub mod api_utils;
pub mod components;
pub mod http;
pub mod icons;
pub mod list_store;
pub mod list_utils;
pub mod page_frame;
pub mod page_standard;
pub mod url_state;
