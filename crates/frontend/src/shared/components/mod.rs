pub mod data_table;
pub mod page_header;
pub mod pagination_controls;
pub mod record_details;
pub mod stat_card;
pub mod submit_notice;
pub mod table;
pub mod ui;
