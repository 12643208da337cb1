//! Crop command implementation.

use anyhow::Context;
use base64::Engine;
use odoread_core::{crop_frame, preprocess, ImagingError, ReaderConfig};
use odoread_protocol::{ErrorCode, Response, ResponseData};
use tracing::info;

use crate::cli::CropArgs;
use crate::input::{expand_path, with_scale};
use crate::output::Output;

pub fn run(args: CropArgs, config: &ReaderConfig, output: &Output) -> anyhow::Result<()> {
    let config = with_scale(config.clone(), args.viewport.scale, output);
    let input = expand_path(&args.image);
    let frame = std::fs::read(&input).with_context(|| format!("Failed to read {:?}", input))?;

    let frame = if args.preprocess || config.preprocess.enabled {
        preprocess(&frame, &config.preprocess)
    } else {
        frame
    };

    let cropped = match crop_frame(
        &frame,
        args.viewport.dimensions(),
        config.scale_adjustment,
        config.jpeg_quality,
    ) {
        Ok(cropped) => cropped,
        Err(e @ ImagingError::EmptyRegion(_)) => {
            output.print_error(ErrorCode::EmptyRegion, &e.to_string());
            std::process::exit(1);
        }
        Err(e) => {
            output.print_error(ErrorCode::ImageError, &e.to_string());
            std::process::exit(1);
        }
    };

    if args.base64 {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&cropped.jpeg);
        output.print_response(&Response::success(ResponseData::Cropped {
            rect: cropped.rect,
            path: None,
            base64: Some(encoded),
        }));
        return Ok(());
    }

    let path = expand_path(&args.output);
    std::fs::write(&path, &cropped.jpeg)
        .with_context(|| format!("Failed to write {:?}", path))?;
    info!("Wrote {} bytes to {:?}", cropped.jpeg.len(), path);

    output.print_response(&Response::success(ResponseData::Cropped {
        rect: cropped.rect,
        path: Some(path.display().to_string()),
        base64: None,
    }));
    Ok(())
}
