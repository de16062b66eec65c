pub mod cmd;
pub mod command;
pub mod fileformat;
pub mod runtime;
pub mod utils;
