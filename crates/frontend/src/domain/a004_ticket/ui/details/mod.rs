//! Ticket create / edit form
//!
//! - view_model.rs: form state, option lists and save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::TicketDetails;
pub use view_model::TicketDetailsViewModel;
