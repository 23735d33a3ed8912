/*!
 * Layout Rendering
 */

use crate::memory::MemoryLayout;
use std::io::{self, Write};

/// Blank line, heading, then one line per segment
pub fn write_layout<W: Write>(out: &mut W, heading: &str, layout: &MemoryLayout) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", heading)?;
    for line in layout.lines() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
