// File: crates/plotline-cli/src/main.rs
// Summary: `plotline` binary; sets up logging, runs one chart and reports what was written.

use clap::Parser;
use plotline_cli::{run, Args};

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    match run(&args) {
        Ok(outcome) => {
            println!("Wrote {} ({} marks)", outcome.svg.display(), outcome.marks);
            if let Some(png) = &outcome.png {
                println!("Wrote {}", png.display());
            }
            if let Some(tooltip) = &outcome.tooltip {
                if tooltip.visible {
                    println!("Tooltip at ({:.1}, {:.1})", tooltip.anchor.x, tooltip.anchor.y);
                    for (label, value) in &tooltip.rows {
                        println!("  {}: {}", label, value);
                    }
                } else {
                    println!("Tooltip hidden (nothing under the pointer)");
                }
            }
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            std::process::exit(1);
        }
    }
}
