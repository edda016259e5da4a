pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod form_state;
pub mod icons;
pub mod list_controller;
pub mod list_utils;
pub mod modal;
pub mod page_frame;
pub mod toast;
