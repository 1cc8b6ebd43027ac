pub mod models;
pub mod errors;
pub mod settings;
pub mod client;
pub mod runner;

pub mod utils;
