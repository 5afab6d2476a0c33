//! Domain layer
//!
//! - `entities`: the package model
//! - `ports`: storage trait implemented by adapters

pub mod entities;
pub mod ports;
