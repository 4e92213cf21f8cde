//! Tauri IPC command handlers.
//!
//! Sub-modules are grouped by concern:
//! - [`storefront`] — full-page snapshot and static store text
//! - [`view`]       — search, category filter and cart-panel flags
//! - [`cart`]       — add / remove / list / checkout
//!
//! Every command that changes state returns a fresh
//! [`storefront::StorefrontSnapshot`], so the frontend redraws from the value
//! it just received instead of tracking state of its own.

pub mod cart;
pub mod storefront;
pub mod view;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::AppError;

/// Acquire a read guard, reporting a poisoned lock as [`AppError::StateLock`].
pub(crate) fn read_lock<'a, T>(
    lock: &'a RwLock<T>,
    what: &str,
) -> Result<RwLockReadGuard<'a, T>, AppError> {
    lock.read()
        .map_err(|e| AppError::StateLock(format!("{what} lock poisoned: {e}")))
}

/// Acquire a write guard, reporting a poisoned lock as [`AppError::StateLock`].
pub(crate) fn write_lock<'a, T>(
    lock: &'a RwLock<T>,
    what: &str,
) -> Result<RwLockWriteGuard<'a, T>, AppError> {
    lock.write()
        .map_err(|e| AppError::StateLock(format!("{what} lock poisoned: {e}")))
}
