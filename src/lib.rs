pub mod cli;
pub mod config;
pub mod docx;
pub mod error;
pub mod matcher;
pub mod printer;
pub mod roster;
pub mod run;
