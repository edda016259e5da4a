//! Общие типы фронтенда: DTO REST API, перечисления, движок списков,
//! проверка прав и валидация форм.
//!
//! The crate has no wasm-specific dependencies, so everything here is unit
//! tested natively.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
