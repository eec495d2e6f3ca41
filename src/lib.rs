// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Library root: the edit session and the headless shell built on it.

pub mod app;
pub mod cli;
pub mod config;
pub mod constant;
pub mod domain;
