#[macro_use]
extern crate tracing;

pub mod cli;
pub mod download;
pub mod error;
pub mod sample;
pub mod task;
pub mod util;
