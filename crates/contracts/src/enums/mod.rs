pub mod department;
pub mod role;
pub mod ticket;

pub use department::Department;
pub use role::Role;
pub use ticket::{TicketCategory, TicketPriority, TicketStatus};
