//! Normalize command implementation.

use odoread_core::{ReaderConfig, ReadingNormalizer};
use odoread_protocol::{ReadingLine, Response, ResponseData};
use tracing::debug;

use crate::cli::NormalizeArgs;
use crate::input::lines_or_stdin;
use crate::output::Output;

pub fn run(args: NormalizeArgs, config: &ReaderConfig, output: &Output) -> anyhow::Result<()> {
    let mode = args.mode.unwrap_or(config.decimal_mode);
    let raw_lines = lines_or_stdin(args.lines)?;
    debug!("Normalizing {} line(s) with mode {}", raw_lines.len(), mode);

    let normalizer = ReadingNormalizer::default();
    let lines: Vec<ReadingLine> = raw_lines
        .into_iter()
        .map(|raw| {
            let cleaned = normalizer.normalize(&raw, mode);
            ReadingLine { raw, cleaned }
        })
        .filter(|line| args.keep_empty || !line.cleaned.is_empty())
        .collect();

    output.print_response(&Response::success(ResponseData::Readings { mode, lines }));
    Ok(())
}
