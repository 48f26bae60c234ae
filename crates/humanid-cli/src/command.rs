use crate::config::{CliConfig, Mode, Width};
use humanid::{Codec, Error, RawId};
use std::io::{self, BufRead, Write};

/// Outcome counts for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub converted: usize,
    pub rejected: usize,
}

/// Converts one value according to `mode`, at integer width `T`.
fn convert<T: RawId>(mode: Mode, codec: &Codec, value: &str) -> Result<String, Error> {
    match mode {
        Mode::Encode => {
            // decimal only; `parse` also accepts a sign
            if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::InvalidDecimal);
            }
            let raw = value.parse::<T>().map_err(|_| Error::InvalidDecimal)?;
            Ok(codec.encode(raw).into_string())
        }
        Mode::Decode => codec.decode::<T>(value).map(|raw| raw.to_string()),
        Mode::Parse => codec.parse_legacy::<T>(value).map(|raw| raw.to_string()),
    }
}

fn convert_at_width(config: &CliConfig, value: &str) -> Result<String, Error> {
    match config.width {
        Width::U16 => convert::<u16>(config.mode, &config.codec, value),
        Width::U32 => convert::<u32>(config.mode, &config.codec, value),
        Width::U64 => convert::<u64>(config.mode, &config.codec, value),
    }
}

/// Converts every value, writing results to `out` and rejections to `err`.
///
/// A rejected value does not stop the run. Only I/O failures are returned as
/// errors.
pub fn run<I, O, E>(config: &CliConfig, values: I, out: &mut O, err: &mut E) -> io::Result<Summary>
where
    I: IntoIterator<Item = String>,
    O: Write,
    E: Write,
{
    let mut summary = Summary::default();
    for value in values {
        match convert_at_width(config, &value) {
            Ok(converted) => {
                tracing::trace!(%value, %converted, "converted");
                writeln!(out, "{converted}")?;
                summary.converted += 1;
            }
            Err(e) => {
                tracing::debug!(%value, error = %e, "rejected");
                writeln!(err, "humanid: {value:?}: {e}")?;
                summary.rejected += 1;
            }
        }
    }
    out.flush()?;
    Ok(summary)
}

/// Splits reader input into whitespace separated values.
pub fn read_values<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.lines().flat_map(|line| {
        let values: Vec<io::Result<String>> = match line {
            Ok(line) => line.split_whitespace().map(|v| Ok(v.to_owned())).collect(),
            Err(e) => vec![Err(e)],
        };
        values
    })
}
