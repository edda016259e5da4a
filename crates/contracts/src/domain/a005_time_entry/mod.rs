pub mod aggregate;

pub use aggregate::{
    format_hours, TimeEntry, TimeEntryDto, TimeEntryQuery, TimeEntryRow, TimesheetSummary,
    MAX_HOURS_PER_ENTRY,
};
