use ppmseam::files::{read_raster, write_energy, write_raster};
use ppmseam::{compute_energy, seamcarve, CarveError};
use std::path::Path;
use std::process;

use clap::{App, AppSettings, Arg, ArgMatches};
use failure::{format_err, Error};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

// Dimensions arrive as signed integers so that zero and negative
// requests get the same message as oversized ones.
fn dimension(matches: &ArgMatches<'_>, name: &str) -> Result<Option<usize>, Error> {
    match matches.value_of(name) {
        None => Ok(None),
        Some(text) => match text.trim().parse::<i64>() {
            Ok(value) if value > 0 => Ok(Some(value as usize)),
            _ => Err(format_err!("dimension out of bounds")),
        },
    }
}

fn opening(role: &'static str) -> impl Fn(CarveError) -> Error {
    move |err| match err {
        CarveError::Io(cause) => format_err!("{} file could not be opened: {}", role, cause),
        other => other.into(),
    }
}

fn run(matches: &ArgMatches<'_>) -> Result<(), Error> {
    let input = Path::new(matches.value_of("input").unwrap_or_default());
    let output = Path::new(matches.value_of("output").unwrap_or_default());
    let newwidth = dimension(matches, "width")?;

    let mut raster = read_raster(input).map_err(opening("input"))?;
    let (width, height) = raster.dimensions();
    let newwidth = newwidth.unwrap_or(width);
    let newheight = dimension(matches, "height")?.unwrap_or(height);
    if newwidth > width || newheight > height {
        return Err(format_err!("dimension out of bounds"));
    }

    if let Some(energy_path) = matches.value_of("energy") {
        write_energy(&compute_energy(&raster), Path::new(energy_path))
            .map_err(opening("energy"))?;
    }

    info!(input = %input.display(), width, height, newwidth, newheight, "resizing");
    seamcarve(&mut raster, newwidth, newheight)?;
    write_raster(&raster, output).map_err(opening("output"))?;
    Ok(())
}

fn main() {
    let matches = App::new("ppmseam")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Seam carving for portable pixmaps")
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(
            Arg::with_name("input")
                .help("The image to shrink")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the shrunken image")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .help("The new width, no larger than the original")
                .required(true)
                .index(3),
        )
        .arg(
            Arg::with_name("height")
                .help("The new height, no larger than the original [default: unchanged]")
                .index(4),
        )
        .arg(
            Arg::with_name("energy")
                .help("Also write the energy map of the original image to FILE")
                .short("e")
                .long("energy")
                .value_name("FILE")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .help("Log more; repeat for more detail")
                .short("v")
                .long("verbose")
                .multiple(true),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    if let Err(err) = run(&matches) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
