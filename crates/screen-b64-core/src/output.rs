//! Writing the final line to stdout (or any writer).

use std::io::Write;

use crate::error::Result;
use crate::transcode::Base64Text;

/// Write `text` followed by a single `\n`, then flush.
///
/// The full line is assembled before anything reaches `out`, and is handed
/// over in one `write_all` call.
pub fn write_line<W: Write>(mut out: W, text: &Base64Text) -> Result<()> {
    let mut line = Vec::with_capacity(text.len() + 1);
    line.extend_from_slice(text.as_str().as_bytes());
    line.push(b'\n');

    out.write_all(&line)?;
    out.flush()?;
    Ok(())
}
