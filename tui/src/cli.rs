//! Printing generations to the standard output.

use crate::args::Args;
use sparselife_lib::{render_with, Generation, Glyphs, Pattern, Trace};
use std::io::{self, Write};

fn print_generation<W: Write>(
    out: &mut W,
    index: usize,
    generation: &Generation,
    glyphs: Glyphs,
    stats: bool,
) -> io::Result<()> {
    out.write_all(render_with(generation, glyphs).as_bytes())?;
    if stats {
        writeln!(
            out,
            "gen {}: {} cells, box {}",
            index,
            generation.len(),
            generation.bounding_box()
        )?;
    }
    Ok(())
}

/// Prints the generations of `trace`, or only the last one.
pub(crate) fn print_trace<W: Write>(
    out: &mut W,
    trace: &Trace,
    glyphs: Glyphs,
    final_only: bool,
    stats: bool,
) -> io::Result<()> {
    if final_only {
        print_generation(out, trace.iterations(), trace.last(), glyphs, stats)?;
    } else {
        for (index, generation) in trace.iter().enumerate() {
            print_generation(out, index, generation, glyphs, stats)?;
        }
    }
    out.flush()
}

pub(crate) fn run(args: Args) -> io::Result<()> {
    let mut out = io::stdout().lock();

    if args.list {
        for pattern in Pattern::ALL.iter() {
            writeln!(out, "{}", pattern)?;
        }
        return out.flush();
    }

    let trace = args.config.trace();
    let glyphs = args.config.format.glyphs();

    #[cfg(feature = "tui")]
    {
        if args.tui {
            drop(out);
            let index = crate::tui::view_trace(&trace, glyphs)?;
            let mut out = io::stdout().lock();
            out.write_all(render_with(&trace[index], glyphs).as_bytes())?;
            return out.flush();
        }
    }

    print_trace(&mut out, &trace, glyphs, args.final_only, args.stats)
}
