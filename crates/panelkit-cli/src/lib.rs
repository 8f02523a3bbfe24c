//! panelkit CLI library
//!
//! Reads a layout document, places its parts on the panel, prints the
//! placements and writes an SVG debug view.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, io::Write};

use log::info;

use panelkit::{LayoutBuilder, PanelkitError, panel::Panel};

/// Runs the panelkit CLI application.
///
/// Prints one `label<TAB>x<TAB>y` line per placed part to stdout, in
/// absolute panel coordinates.
///
/// # Errors
///
/// Returns `PanelkitError` for file I/O, configuration, document, layout and
/// rendering errors.
pub fn run(args: &Args) -> Result<(), PanelkitError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing layout"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let source = fs::read_to_string(&args.input)?;

    let builder = LayoutBuilder::new(app_config);
    let document = builder.parse(&source)?;
    let panel = builder.build(&document)?;

    write_placements(&panel, &mut std::io::stdout().lock())?;
    builder.write_svg(&panel, &args.output)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

/// Writes one tab-separated line per placement.
pub fn write_placements(panel: &Panel, out: &mut impl Write) -> std::io::Result<()> {
    for placed in panel.placements() {
        let position = placed.position();
        writeln!(out, "{}\t{:.3}\t{:.3}", placed.label(), position.x(), position.y())?;
    }
    Ok(())
}
