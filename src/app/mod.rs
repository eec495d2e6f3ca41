// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// Interactive shell: messages, model and update loop around the edit session.

pub mod drop;
pub mod message;
pub mod model;
pub mod update;
pub mod view;

pub use message::AppMessage;
pub use model::AppModel;
pub use update::update;
