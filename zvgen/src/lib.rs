extern crate clap;
extern crate zipvfs;

pub mod cli;
pub mod error;
pub mod generate;
pub mod utils;
