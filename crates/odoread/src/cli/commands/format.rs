//! Format command implementation.

use odoread_core::{apply_mode, ReaderConfig};
use odoread_protocol::{ErrorCode, Response, ResponseData};

use crate::cli::FormatArgs;
use crate::output::Output;

pub fn run(args: FormatArgs, config: &ReaderConfig, output: &Output) -> anyhow::Result<()> {
    let mode = args.mode.unwrap_or(config.decimal_mode);
    let digits = args.digits.trim();

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        output.print_error(ErrorCode::InvalidRequest, "Expected a string of digits");
        std::process::exit(1);
    }

    let value = apply_mode(digits, mode);
    output.print_response(&Response::success(ResponseData::Formatted { mode, value }));
    Ok(())
}
