use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod error;
mod icon_gen;
mod png;
mod shader;

#[derive(Debug, Parser)]
#[clap(
    name = "glyph-icons",
    about = "Render the gradient glyph icon set as PNG files"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "icons")]
    output: PathBuf,

    /// Icon sizes to render, in pixels.
    #[clap(
        short,
        long,
        value_delimiter = ',',
        value_name = "SIZES",
        default_values_t = icon_gen::DEFAULT_SIZES,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    sizes: Vec<u32>,

    /// Enable debug logging (RUST_LOG takes precedence).
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    icon_gen::generate_icons(icon_gen::Args {
        output: args.output,
        sizes: args.sizes,
    })
}
