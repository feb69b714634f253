use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::{env, path::PathBuf};
use tracing_subscriber::filter::LevelFilter;

use kindle_to_zim::{
    clippings::{parser::parse_clippings, read_clippings_file},
    utility::date::CreationDate,
    zim::writer::ZimWriter,
};

struct Args {
    clippings_path: PathBuf,
    output_path: PathBuf,
    json: bool,
}

fn options() -> getopts::Options {
    let mut opts = getopts::Options::new();
    opts.optopt(
        "o",
        "output",
        "directory to write pages into (default: current directory)",
        "DIR",
    );
    opts.optflag("j", "json", "also write the parsed clippings as catalog.json");
    opts.optflag("h", "help", "print this help");
    opts
}

fn get_args() -> Result<Option<Args>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let opts = options();

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    if matches.opt_present("h") {
        print!("{}", opts.usage("Usage: kindle-to-zim [options] <CLIPPINGS>"));
        return Ok(None);
    }

    let clippings_path = matches
        .free
        .get(0)
        .context("path to clippings file is required")?
        .into();
    let output_path = matches
        .opt_str("o")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let json = matches.opt_present("j");

    Ok(Some(Args {
        clippings_path,
        output_path,
        json,
    }))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(args) = get_args()? else {
        return Ok(());
    };

    let txt = read_clippings_file(&args.clippings_path)?;
    let catalog = parse_clippings(&txt);

    let out = ZimWriter::init(&args.output_path)?;

    if args.json {
        out.save_catalog_json(&catalog)?;
    }

    let created = CreationDate::now();
    let pb = create_progress_bar(catalog.len() as u64);
    let summary = out.export_catalog(&catalog, &created, pb);

    println!("{}", summary);

    Ok(())
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} books")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#-"),
    );
    pb
}
