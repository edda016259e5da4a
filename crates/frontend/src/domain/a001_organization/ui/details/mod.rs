//! Organization Details UI Module
//!
//! - view_model.rs: form state and save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::OrganizationDetails;
pub use view_model::OrganizationDetailsViewModel;
