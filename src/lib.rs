#![cfg_attr(not(test), no_std)]

mod analog;
mod config;
mod error;
mod reader;
mod variant;

pub use analog::AnalogInput;
pub use config::*;
pub use error::*;
pub use reader::*;
pub use variant::*;
