pub mod config;
pub mod greet;
pub mod run;
pub mod show;
pub mod weather;
