//! The built-in Bluetooth NCP message table.

pub mod cmd;
pub mod evt;

pub use cmd::COMMANDS;
pub use evt::EVENTS;
