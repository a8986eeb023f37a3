pub mod adjust;
pub mod allocation;
pub mod analysis;
pub mod board;
pub mod config;
pub mod confirm;
pub mod error;
pub mod io;
pub mod paths;
pub mod record;
pub mod report;
pub mod shift;
pub mod store;
pub mod types;

pub use error::{Result, TariqError};
