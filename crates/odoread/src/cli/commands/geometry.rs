//! Geometry command implementation.

use odoread_core::{compute_crop_rect, ReaderConfig};
use odoread_protocol::{Orientation, Response, ResponseData};

use crate::cli::GeometryArgs;
use crate::input::with_scale;
use crate::output::Output;

pub fn run(args: GeometryArgs, config: &ReaderConfig, output: &Output) -> anyhow::Result<()> {
    let config = with_scale(config.clone(), args.viewport.scale, output);
    let rect = compute_crop_rect(
        args.image_width,
        args.image_height,
        args.viewport.dimensions(),
        config.scale_adjustment,
    );

    output.print_response(&Response::success(ResponseData::Geometry {
        orientation: Orientation::of_image(args.image_width, args.image_height),
        rect,
    }));
    Ok(())
}
