//! Read command implementation: crop, OCR and normalize one frame.

use std::time::Duration;

use anyhow::Context;
use odoread_core::{find_models_dir, OcrService, OdometerReader, ReadError, ReaderConfig};
use odoread_protocol::{ErrorCode, Response, ResponseData};
use tracing::debug;

use crate::cli::ReadArgs;
use crate::input::{expand_path, with_scale};
use crate::output::Output;

pub async fn run(
    args: ReadArgs,
    mut config: ReaderConfig,
    output: &Output,
    timeout_ms: u64,
) -> anyhow::Result<()> {
    if let Some(mode) = args.mode {
        config.decimal_mode = mode;
    }
    if args.preprocess {
        config.preprocess.enabled = true;
    }
    let config = with_scale(config, args.viewport.scale, output);

    let input = expand_path(&args.image);
    let frame = std::fs::read(&input).with_context(|| format!("Failed to read {:?}", input))?;

    let models_dir = match args.models {
        Some(ref dir) => expand_path(dir),
        None => find_models_dir()?,
    };
    let ocr = match OcrService::new(&models_dir) {
        Ok(ocr) => ocr,
        Err(e) => {
            output.print_error(ErrorCode::OcrError, &format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let viewport = args.viewport.dimensions();
    let reader = OdometerReader::new(ocr, config);

    // OCR is CPU-bound; run it off the runtime and bound it by the timeout.
    debug!("Reading {:?} (timeout {}ms)", input, timeout_ms);
    let task = tokio::task::spawn_blocking(move || reader.read(&frame, viewport));
    let result = match tokio::time::timeout(Duration::from_millis(timeout_ms), task).await {
        Ok(joined) => joined.context("OCR task panicked")?,
        Err(_) => {
            output.print_error(
                ErrorCode::Timeout,
                &format!("OCR did not finish within {}ms", timeout_ms),
            );
            std::process::exit(1);
        }
    };

    match result {
        Ok(reading) => {
            output.print_response(&Response::success(ResponseData::Reading {
                crop: reading.crop,
                raw_lines: reading.raw_lines,
                readings: reading.readings,
            }));
            Ok(())
        }
        Err(e @ ReadError::NothingRecognized) => {
            output.print_error(ErrorCode::NothingRecognized, &e.to_string());
            std::process::exit(1);
        }
        Err(e @ ReadError::Ocr(_)) => {
            output.print_error(ErrorCode::OcrError, &e.to_string());
            std::process::exit(1);
        }
    }
}
