// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/core/mod.rs
//
// Core document state: the edit session and the info it reports.

pub mod info;
pub mod session;
