use std::path::PathBuf;

use clap::Args;

use crate::detect::{find_areas, load_template, marked_pixels, Area};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::subsets::subset_count;

/// List the segments detected in a template without rendering anything
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Template image to analyse
    #[arg(required = true)]
    pub template: PathBuf,
}

pub fn run(args: InspectArgs, printer: &Printer) -> Result<()> {
    let display = display_path(&args.template);
    let img = load_template(&args.template)?;
    let areas: Vec<Area> = find_areas(marked_pixels(&img)).collect();

    let combinations = subset_count(areas.len()).map_or_else(|| "?".to_string(), |n| n.to_string());
    printer.status(
        "Inspected",
        &format!(
            "{} in {} ({} combinations)",
            plural(areas.len(), "segment", "segments"),
            display,
            combinations
        ),
    );

    // Tab-separated rows on stdout: digit, pixels, min corner, max corner
    for line in describe(&areas) {
        println!("{}", line);
    }

    Ok(())
}

/// One line per area, in tag digit order.
fn describe(areas: &[Area]) -> Vec<String> {
    areas
        .iter()
        .enumerate()
        .filter_map(|(index, area)| {
            let (min, max) = area.bounds()?;
            Some(format!(
                "{}\t{}\t{},{}\t{},{}",
                index,
                area.len(),
                min.x,
                min.y,
                max.x,
                max.y
            ))
        })
        .collect()
}
