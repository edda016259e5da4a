//! Row-level ticket dialogs: read-only card, status change and assignment

mod assign_dialog;
mod status_dialog;
mod ticket_card;

pub use assign_dialog::TicketAssignDialog;
pub use status_dialog::TicketStatusDialog;
pub use ticket_card::TicketCard;
