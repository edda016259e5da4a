//! Time entry create / edit form with two cascading selects:
//! organization → customers and process → activities.

mod view;
mod view_model;

pub use view::TimeEntryDetails;
pub use view_model::TimeEntryDetailsViewModel;
