//! `antd-formgen` — renders Ant Design form-field components from a manifest.
//!
//! Usage:
//!   antd-formgen -i <manifest.json> [-m <Model>...] [-o <dir>] [-r]

mod config;

use std::path::PathBuf;

use anyhow::Result;
use antd_formgen_lib::{Codegen, Manifest, OutputWriter, ReactFormGenerator};
use clap::Parser;
use tracing::info;

use config::FormgenConfig;

#[derive(Parser, Debug)]
#[command(name = "antd-formgen")]
#[command(about = "Creates ant design react components from model field descriptors")]
struct Args {
    /// Input manifest (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Models to generate (default: all in the manifest)
    #[arg(short, long, num_args = 1..)]
    model: Vec<String>,

    /// Output root (overrides `component_output_path`)
    #[arg(short, long)]
    output_path: Option<PathBuf>,

    /// Output file name (single model only)
    #[arg(short, long)]
    file_name: Option<String>,

    /// Replace existing components with the same file name
    #[arg(short, long)]
    replace_existing: bool,

    /// Config file
    #[arg(short, long, default_value_os_t = FormgenConfig::default_path())]
    config: PathBuf,

    /// Print generated sources instead of writing files
    #[arg(long)]
    stdout: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = FormgenConfig::load(&args.config)?
        .with_overrides(args.output_path, args.replace_existing);

    info!("Reading manifest: {}", args.input.display());
    let manifest = Manifest::load(&args.input)?.select(&args.model)?;

    let mut generator = ReactFormGenerator::new();
    if let Some(name) = args.file_name {
        generator = generator.with_file_name(name);
    }
    info!("Generating {} code for {} model(s)", generator.language(), manifest.models.len());
    let code = generator.generate(&manifest)?;

    if args.stdout {
        for file in &code.files {
            println!("// {}\n{}", file.path, file.content);
        }
        return Ok(());
    }

    let writer = OutputWriter::new(config.component_output_path, config.replace_existing);
    for path in writer.write_all(&code.files)? {
        println!("Successfully created component file: {}", path.display());
    }
    Ok(())
}
