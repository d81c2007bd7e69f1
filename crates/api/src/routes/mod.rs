//! Route handlers

pub mod index;
pub mod observations;
pub mod stations;
pub mod temperature;
