pub mod cell;
pub mod config;
pub mod constraint;
pub mod grid;
pub mod messages;
pub mod range;
pub mod selection;
pub mod timezone;
