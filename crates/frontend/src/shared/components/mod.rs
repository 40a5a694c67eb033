pub mod card_animated;
pub mod contact_list;
pub mod empty_state;
pub mod filter_panel;
pub mod link;
pub mod page_header;
pub mod pagination_controls;
pub mod tab_bar;
pub mod ui;
