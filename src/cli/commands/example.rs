use clap::Args;
use std::path::PathBuf;

use crate::bio::samples::{example_fasta, ExampleKind};

#[derive(Args)]
pub struct ExampleArgs {
    /// Kind of example input
    #[arg(value_enum)]
    pub kind: ExampleKind,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: ExampleArgs) -> anyhow::Result<()> {
    let fasta = example_fasta(args.kind);

    match args.output {
        Some(path) => {
            std::fs::write(&path, fasta).map_err(crate::SeqcheckError::from)?;
            crate::cli::output::success(&format!("Wrote example to {}", path.display()));
        }
        None => print!("{}", fasta),
    }

    Ok(())
}
