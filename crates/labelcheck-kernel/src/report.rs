//! Human-readable listings written in verbose mode.

use std::io::Write;
use std::path::Path;

use crate::discover::DiscoveredFiles;
use crate::validator::InvalidLabelReport;

/// Write the `Discovered files:` listing.
pub fn write_discovered<W: Write + ?Sized>(
    out: &mut W,
    files: &DiscoveredFiles,
) -> std::io::Result<()> {
    writeln!(out, "Discovered files:")?;
    for path in files.iter() {
        writeln!(out, "- {}", path.display())?;
    }
    Ok(())
}

/// Write the invalid labels found in `file`. Writes nothing for a clean report.
///
/// ```text
/// The following invalid service labels were discovered in compose.yml:
///    000: web:
///      - .foo=baz
/// ```
pub fn write_invalid<W: Write + ?Sized>(
    out: &mut W,
    file: &Path,
    report: &InvalidLabelReport,
) -> std::io::Result<()> {
    if report.is_clean() {
        return Ok(());
    }
    writeln!(
        out,
        "The following invalid service labels were discovered in {}:",
        file.display()
    )?;
    for (index, (service, labels)) in report.iter().enumerate() {
        writeln!(out, "   {index:03}: {service}:")?;
        for label in labels {
            writeln!(out, "     - {label}")?;
        }
    }
    Ok(())
}
