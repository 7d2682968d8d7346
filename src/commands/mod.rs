//! Command handlers for the gridclear binary

pub mod clear;
pub mod list;
