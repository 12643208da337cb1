//! Redisplay command implementation.

use odoread_core::{redisplay, ReaderConfig};
use odoread_protocol::{Response, ResponseData};

use crate::cli::RedisplayArgs;
use crate::input::lines_or_stdin;
use crate::output::Output;

pub fn run(args: RedisplayArgs, config: &ReaderConfig, output: &Output) -> anyhow::Result<()> {
    let mode = args.mode.unwrap_or(config.decimal_mode);
    let lines = lines_or_stdin(args.lines)?;

    let lines = redisplay(&lines, mode);
    output.print_response(&Response::success(ResponseData::Lines { lines }));
    Ok(())
}
