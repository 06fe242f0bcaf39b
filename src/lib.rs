#![no_std]

mod error;

pub mod config;
pub mod device;
pub mod interface;
mod log;
pub mod params;
pub mod registers;

pub use crate::device::Lis3lv02;
pub use crate::error::{Error, Result};
