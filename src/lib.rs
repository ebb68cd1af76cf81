//! GCV保証工賃 標準作業時間シート → JSON変換

pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod export;
pub mod reader;

pub use converter::{load_records, save_records, ConvertOptions, ConvertReport};
pub use error::{Result, WageError};
