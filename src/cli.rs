// SPDX-License-Identifier: GPL-3.0-or-later
// src/cli.rs
//
// Headless driver: replay edit steps from the command line through the shell.
//
// Usage examples:
//   pictura photo.png --step grayscale --save gray.png
//   pictura photo.png --step crop:10,10,200,120 --step resize:64x64 --save thumb.jpg
//   pictura photo.png --canvas 1024x768 --step select:40,40,300,200 --step crop

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{Context, anyhow, bail};
use clap::Parser;

use crate::app::{AppMessage, AppModel, update};
use crate::config::AppConfig;
use crate::domain::document::export;

/// Crop, grayscale, resize and save images.
///
/// Opens FILE, replays each --step in order as if done in the editor window,
/// then prints the parameter panel.
#[derive(Parser, Debug, Clone)]
#[command(name = "pictura", version, about)]
pub struct Args {
    /// Image file to open (PNG, JPEG, BMP, TIFF).
    pub file: Option<PathBuf>,

    /// Edit step: select:X0,Y0,X1,Y1 | crop | crop:X1,Y1,X2,Y2 | clear |
    /// grayscale | resize:WxH | keep-aspect | reset. Repeatable.
    #[arg(short = 's', long = "step", value_name = "STEP")]
    pub steps: Vec<Step>,

    /// Simulate a drag-and-drop onto the canvas with this payload.
    #[arg(long, value_name = "PAYLOAD")]
    pub drop: Option<String>,

    /// Save the edited image (png, jpg, jpeg, bmp) when done.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub save: Option<PathBuf>,

    /// Save the preview pane image when done.
    #[arg(long, value_name = "FILE")]
    pub preview: Option<PathBuf>,

    /// Canvas size used to map selections, e.g. 1024x768.
    #[arg(long, value_name = "WxH")]
    pub canvas: Option<CanvasSize>,

    /// Start with "keep aspect ratio" switched off.
    #[arg(long)]
    pub stretch: bool,

    /// Print the log pane after the parameter panel.
    #[arg(short = 'l', long = "log")]
    pub show_log: bool,
}

/// One user action given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// `select:X0,Y0,X1,Y1` - drag a selection on the canvas.
    Select(f32, f32, f32, f32),
    /// `crop` - crop to the current selection.
    CropSelection,
    /// `crop:X1,Y1,X2,Y2` - crop in image coordinates.
    CropTo(f64, f64, f64, f64),
    /// `clear` - drop the selection (double click).
    ClearSelection,
    Grayscale,
    /// `resize:WxH` - uses the keep-aspect toggle.
    Resize(String, String),
    /// `keep-aspect` - toggle the keep-aspect checkbox.
    ToggleKeepAspect,
    Reset,
}

impl Step {
    /// Messages the shell would receive for this step.
    pub fn messages(&self) -> Vec<AppMessage> {
        match self {
            Self::Select(x0, y0, x1, y1) => vec![
                AppMessage::CropDragStart { x: *x0, y: *y0 },
                AppMessage::CropDragMove { x: *x1, y: *y1 },
                AppMessage::CropDragEnd { x: *x1, y: *y1 },
            ],
            Self::CropSelection => vec![AppMessage::ApplyCrop],
            Self::CropTo(x1, y1, x2, y2) => vec![AppMessage::CropTo {
                x1: *x1,
                y1: *y1,
                x2: *x2,
                y2: *y2,
            }],
            Self::ClearSelection => vec![AppMessage::CancelCrop],
            Self::Grayscale => vec![AppMessage::Grayscale],
            Self::Resize(width, height) => vec![AppMessage::Resize {
                width: width.clone(),
                height: height.clone(),
            }],
            Self::ToggleKeepAspect => vec![AppMessage::ToggleKeepAspect],
            Self::Reset => vec![AppMessage::Reset],
        }
    }
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, params) = match s.split_once(':') {
            Some((name, params)) => (name, Some(params)),
            None => (s, None),
        };

        match (name.trim().to_ascii_lowercase().as_str(), params) {
            ("select", Some(p)) => {
                let [x0, y0, x1, y1] = parse_four::<f32>(p)?;
                Ok(Self::Select(x0, y0, x1, y1))
            }
            ("crop", None) => Ok(Self::CropSelection),
            ("crop", Some(p)) => {
                let [x1, y1, x2, y2] = parse_four::<f64>(p)?;
                Ok(Self::CropTo(x1, y1, x2, y2))
            }
            ("clear", None) => Ok(Self::ClearSelection),
            ("grayscale" | "gray", None) => Ok(Self::Grayscale),
            ("resize", Some(p)) => {
                let (w, h) = p
                    .split_once(['x', 'X'])
                    .ok_or_else(|| anyhow!("expected resize:WIDTHxHEIGHT, got '{s}'"))?;
                Ok(Self::Resize(w.to_string(), h.to_string()))
            }
            ("keep-aspect", None) => Ok(Self::ToggleKeepAspect),
            ("reset", None) => Ok(Self::Reset),
            _ => bail!("unknown step '{s}'"),
        }
    }
}

/// Canvas size given as `WIDTHxHEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl FromStr for CanvasSize {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| anyhow!("expected WIDTHxHEIGHT, got '{s}'"))?;
        Ok(Self {
            width: w.trim().parse().with_context(|| format!("bad width in '{s}'"))?,
            height: h.trim().parse().with_context(|| format!("bad height in '{s}'"))?,
        })
    }
}

fn parse_four<T>(params: &str) -> anyhow::Result<[T; 4]>
where
    T: FromStr + Copy,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let values = params
        .split(',')
        .map(|v| v.trim().parse::<T>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("bad coordinates '{params}'"))?;

    match values.as_slice() {
        [a, b, c, d] => Ok([*a, *b, *c, *d]),
        _ => bail!("expected four comma-separated values, got '{params}'"),
    }
}

/// Build the effective configuration from defaults and flags.
pub fn config_from_args(args: &Args) -> AppConfig {
    let mut config = AppConfig::default();
    if let Some(canvas) = args.canvas {
        config.canvas_width = canvas.width;
        config.canvas_height = canvas.height;
    }
    if args.stretch {
        config.keep_aspect = false;
    }
    config
}

/// Run the shell headless. Exit code is non-zero if any action failed.
pub fn run(args: Args) -> anyhow::Result<ExitCode> {
    let config = config_from_args(&args);
    let mut model = AppModel::new(config);
    let mut failures = 0usize;

    let mut messages = Vec::new();
    if let Some(file) = &args.file {
        messages.push(AppMessage::OpenPath(file.clone()));
    }
    if let Some(payload) = &args.drop {
        messages.push(AppMessage::FileDropped(payload.clone()));
    }
    messages.extend(args.steps.iter().flat_map(Step::messages));
    if let Some(target) = &args.save {
        messages.push(AppMessage::SaveAs(target.clone()));
    }

    for message in messages {
        log::debug!("Dispatch {message:?}");
        update(&mut model, message);

        if let Some(notice) = model.notice.take() {
            log::info!("{notice}");
        }
        if model.error.is_some() {
            failures += 1;
            update(&mut model, AppMessage::ClearError);
        }
    }

    if let Some(path) = &args.preview {
        write_preview(&model, path)?;
    }

    for line in &model.params {
        println!("{line}");
    }
    if args.show_log {
        println!();
        for line in &model.log {
            println!("{line}");
        }
    }

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn write_preview(model: &AppModel, path: &Path) -> anyhow::Result<()> {
    let preview = model
        .preview
        .as_ref()
        .ok_or_else(|| anyhow!("no image loaded, nothing to preview"))?;
    export::save_image(preview, path)
        .with_context(|| format!("failed to write preview {}", path.display()))?;
    Ok(())
}
