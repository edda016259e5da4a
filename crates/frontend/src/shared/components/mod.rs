pub mod confirm_dialog;
pub mod date_range_picker;
pub mod filter_panel;
pub mod form_field;
pub mod list_header;
pub mod pagination_controls;
pub mod row_actions;
pub mod table;
