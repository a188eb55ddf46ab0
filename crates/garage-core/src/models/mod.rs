//! Data models for the vehicle info endpoint

#[macro_use]
mod wire;

mod capability;
mod info;
mod vehicle;

pub use capability::*;
pub use info::*;
pub use vehicle::*;
