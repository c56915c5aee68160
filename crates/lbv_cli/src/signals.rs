//! `lbv signals`: list every signal in a dump.

use lbv_wave::TimelineSet;

use crate::settings::{load_config, resolve_input};
use crate::{GlobalArgs, SignalsArgs};

/// Runs the `lbv signals` command.
pub fn run(args: &SignalsArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_config(global)?;
    let input = resolve_input(args.file.as_deref(), &config)?;

    if !global.quiet {
        eprintln!("   Parsing {}", input.display());
    }
    let timelines = lbv_wave::parse_file(&input)?;

    for line in listing(&timelines) {
        println!("{line}");
    }
    Ok(0)
}

/// One line per signal: name, width, type, ids, event count.
fn listing(timelines: &TimelineSet) -> Vec<String> {
    timelines
        .iter()
        .map(|(def, timeline)| {
            let width = def
                .width
                .map_or_else(|| "?".to_string(), |w| w.to_string());
            format!(
                "{:15} {:>4}  {:8} {:8} {:6} events",
                def.name,
                width,
                def.var_type,
                def.ids.join(","),
                timeline.len()
            )
        })
        .collect()
}
