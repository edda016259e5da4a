pub mod a001_organization;
pub mod a002_customer;
pub mod a003_process;
pub mod a004_ticket;
pub mod a005_time_entry;
