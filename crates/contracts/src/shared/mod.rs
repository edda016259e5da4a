pub mod api;
pub mod cascade;
pub mod list;
pub mod notification;
pub mod validation;
