pub mod cli;
pub mod config;
pub mod constants;
pub mod contact;
pub mod content;
pub mod menu;
pub mod page;
pub mod server;
pub mod service;
pub mod storage;
pub mod validation;

pub use anyhow::Result;
