pub mod aggregate;

pub use aggregate::{Ticket, TicketAssignment, TicketDto, TicketRow, TicketStatusChange};
