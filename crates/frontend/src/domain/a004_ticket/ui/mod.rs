pub mod actions;
pub mod badges;
pub mod details;
pub mod list;
