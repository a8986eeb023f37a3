pub mod config;
pub mod distribution;
pub mod init;
pub mod records;
pub mod sessions;

use crate::error::AppError;
use std::sync::{Mutex, MutexGuard};

/// Lock a piece of session state, turning poisoning into a 500.
pub(crate) fn lock<T>(m: &Mutex<T>) -> Result<MutexGuard<'_, T>, AppError> {
    m.lock()
        .map_err(|_| AppError::internal("session state lock poisoned"))
}

pub(crate) fn join_error(e: tokio::task::JoinError) -> AppError {
    AppError::internal(format!("task join error: {e}"))
}
