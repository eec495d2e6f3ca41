// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/mod.rs
//
// Document module root: the edit session, its operations and export.

pub mod core;
pub mod error;
pub mod export;
pub mod operations;

#[cfg(test)]
pub mod fixture;

pub use self::core::info::{ColorMode, ImageInfo};
pub use self::core::session::EditSession;
pub use self::error::{EditError, EditResult};
