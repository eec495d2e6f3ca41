// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Domain layer: image editing state and operations, free of UI concerns.

pub mod document;
