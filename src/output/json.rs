//! JSON rendering for `--json`.

use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Pretty-printed JSON followed by a newline.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)? + "\n")
}

/// Write `items` as one JSON array, serialising each item as it arrives.
pub fn write_json_seq<W, T, I>(out: &mut W, items: I) -> Result<()>
where
    W: Write,
    T: Serialize,
    I: IntoIterator<Item = Result<T>>,
{
    out.write_all(b"[")?;
    for (i, item) in items.into_iter().enumerate() {
        let sep = if i == 0 { "\n" } else { ",\n" };
        write!(out, "{sep}{}", serde_json::to_string_pretty(&item?)?)?;
    }
    out.write_all(b"\n]\n")?;
    Ok(())
}
