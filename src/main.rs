use clap::Parser;
use std::path::PathBuf;

use inktrace::vectorize::{self, svg, DEFAULT_INPUT};

#[derive(Parser)]
#[command(name = "inktrace")]
#[command(about = "Trace dark shapes in an image and print them as SVG paths")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE", default_value = DEFAULT_INPUT)]
    image_path: PathBuf,

    /// Print progress to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Save debug outputs to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Wrap the paths in a complete <svg> document
    #[arg(long)]
    document: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if args.verbose {
        eprintln!("Loading image: {:?}", args.image_path);
    }

    let img = vectorize::load_image(&args.image_path)?;
    let (width, height) = (img.width(), img.height());

    if args.verbose {
        eprintln!("Image loaded: {}x{}\n", width, height);
    }

    let mut pipeline = vectorize::build_standard_pipeline(args.verbose);
    if let Some(debug_dir) = args.debug_out {
        pipeline = pipeline.with_debug(debug_dir)?;
    }

    let results = pipeline.run(img)?;
    let paths = vectorize::collect_paths(&results);

    if args.verbose {
        eprintln!("\nEmitted {} path(s)", paths.len());
    }

    // Nothing reaches stdout until the whole pipeline has succeeded
    let output = if args.document {
        svg::wrap_document(&paths, width, height)
    } else {
        svg::join_elements(&paths)
    };

    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
