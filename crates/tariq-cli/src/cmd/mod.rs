pub mod analyze;
pub mod config;
pub mod distribute;
pub mod init;
pub mod record;
pub mod shift;
pub mod ui;
