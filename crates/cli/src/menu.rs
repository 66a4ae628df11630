//! Help output listing the drills that are actually on disk.

use std::io::{IsTerminal, Write};
use std::path::Path;

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use log::warn;

use drill_runner_core::drill_definitions::{DrillFile, DrillKind};
use drill_runner_core::error::{Error, Result};
use drill_runner_core::selection::list_drills;

fn queue_menu<W: Write>(
    writer: &mut W,
    title: &str,
    drills: &[DrillFile],
    styled: bool,
) -> std::io::Result<()> {
    if styled {
        queue!(writer, SetAttribute(Attribute::Bold))?;
    }
    queue!(writer, Print(format!("{title}\n")))?;
    if styled {
        queue!(writer, SetAttribute(Attribute::Reset))?;
    }

    if drills.is_empty() {
        if styled {
            queue!(writer, SetForegroundColor(Color::Red))?;
        }
        queue!(writer, Print("  No drills found!\n"))?;
        if styled {
            queue!(writer, ResetColor)?;
        }
    }

    let id_width = drills.iter().map(|drill| drill.id.len()).max().unwrap_or(0);
    for drill in drills {
        queue!(writer, Print("  "))?;
        if styled {
            queue!(writer, SetForegroundColor(Color::DarkGreen))?;
        }
        queue!(writer, Print(format!("{:>id_width$}", drill.id)))?;
        if styled {
            queue!(writer, ResetColor)?;
        }
        queue!(writer, Print(format!(" - {}\n", drill.description())))?;
    }

    writer.flush()
}

/// Writes the drill menu in the given order, highlighting the ids when
/// `styled` is set.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_menu<W: Write>(
    writer: &mut W,
    title: &str,
    drills: &[DrillFile],
    styled: bool,
) -> Result<()> {
    queue_menu(writer, title, drills, styled)
        .map_err(|e| Error::io_error("menu output".to_string(), "<terminal>".to_string(), e))
}

/// Lists `directory` and writes the menu, styled only on a terminal.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed or writing fails.
pub fn print_menu<W: Write + IsTerminal>(
    writer: &mut W,
    directory: &Path,
    kind: DrillKind,
) -> Result<()> {
    let drills = list_drills(directory, kind)?;
    let styled = writer.is_terminal();
    write_menu(writer, "Available drills:", &drills, styled)
}

/// Like [`print_menu`], for output that is only a hint: a directory that
/// cannot be listed is logged and skipped.
pub fn print_menu_hint<W: Write + IsTerminal>(writer: &mut W, directory: &Path, kind: DrillKind) {
    if let Err(e) = print_menu(writer, directory, kind) {
        warn!("Could not list drills: {e}");
    }
}
