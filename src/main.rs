// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Application entry point.

use std::process::ExitCode;

use clap::Parser;

use pictura::cli::{self, Args};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match cli::run(args) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
