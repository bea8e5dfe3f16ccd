use std::{
    fs::File,
    io::{BufReader, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::{Args, Parser};
use log::info;

use rectsweep::{
    coverage::{CompressedCounter, CoverageCounter, DenseCounter, TreeCounter},
    input::{self, Limits},
    AreaSweeper, Rectangles,
};

#[derive(Copy, Clone, Debug, Default, clap::ValueEnum)]
enum Counter {
    #[default]
    Compressed,
    Tree,
    Dense,
}

#[cfg(feature = "generators")]
#[derive(Copy, Clone, Debug, clap::ValueEnum)]
enum Example {
    Checkerboard,
    Staircase,
}

/// Computes the area covered by a union of rectangles.
#[derive(Parser)]
struct Cli {
    #[command(flatten)]
    input: Input,

    /// Where to write the area. Defaults to stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// How to measure coverage along the sweep line.
    #[arg(long, value_enum, default_value_t)]
    counter: Counter,

    /// The largest allowed absolute value of a coordinate.
    #[arg(long, default_value_t = Limits::DEFAULT_MAX_COORDINATE)]
    max_coordinate: u32,

    /// The largest allowed number of rectangles.
    #[arg(long, default_value_t = Limits::DEFAULT_MAX_RECTANGLES)]
    max_rectangles: usize,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Input {
    /// A file with one rectangle per line, as four integers `x0 y0 x1 y1`.
    input: Option<PathBuf>,

    /// Use a generated example instead of reading a file.
    #[cfg(feature = "generators")]
    #[arg(long, value_enum)]
    example: Option<Example>,
}

fn get_rectangles(source: &Input, limits: &Limits) -> anyhow::Result<Rectangles> {
    #[cfg(feature = "generators")]
    {
        if let Some(example) = source.example {
            return Ok(match example {
                Example::Checkerboard => rectsweep::generators::checkerboard(10),
                Example::Staircase => rectsweep::generators::staircase(50),
            });
        }
    }

    let Some(path) = &source.input else {
        anyhow::bail!("no input given");
    };
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let rects = input::read_rectangles(BufReader::new(file), limits)
        .with_context(|| format!("invalid input in {}", path.display()))?;
    Ok(rects)
}

fn compute_area<C: CoverageCounter>(rects: &Rectangles) -> anyhow::Result<u64> {
    Ok(AreaSweeper::<C>::with_counter(rects)?.area())
}

pub fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();
    let limits = Limits {
        max_coordinate: args.max_coordinate,
        max_rectangles: args.max_rectangles,
    };

    let rects = get_rectangles(&args.input, &limits)?;
    info!(
        "computing the area of {} rectangles with the {:?} counter",
        rects.len(),
        args.counter
    );
    let area = match args.counter {
        Counter::Compressed => compute_area::<CompressedCounter>(&rects)?,
        Counter::Tree => compute_area::<TreeCounter>(&rects)?,
        Counter::Dense => compute_area::<DenseCounter>(&rects)?,
    };

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            input::write_area(file, area)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            input::write_area(&mut stdout, area)?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}
