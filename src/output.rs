use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

// ---------------------------------------------------------------------------
// JSON formatting
// ---------------------------------------------------------------------------

/// Compact JSON with `", "` between array elements: `[1, 2, 3]`.
///
/// Matches the files the asset pipeline already ships, so regenerating an
/// unchanged subset leaves the file byte-identical.
#[derive(Debug, Default)]
struct SpacedArrayFormatter;

impl Formatter for SpacedArrayFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }
}

/// Serialize `value` into `writer` with [`SpacedArrayFormatter`].
pub fn to_writer_spaced<W: Write, T: Serialize + ?Sized>(writer: W, value: &T) -> Result<()> {
    let mut ser = Serializer::with_formatter(writer, SpacedArrayFormatter);
    value.serialize(&mut ser).context("serializing JSON")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Subset files
// ---------------------------------------------------------------------------

/// Overwrite `path` with `ids` as a flat JSON array.
pub fn write_ids(path: &Path, ids: &[u64]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    to_writer_spaced(&mut writer, ids)?;
    writer
        .flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
