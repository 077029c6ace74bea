use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rosidl::IdlLoader;

use crate::output::OutputArgs;

#[derive(Args)]
pub struct ParseArgs {
    /// Path to the .idl file
    input: PathBuf,

    /// Fail instead of printing a partial tree when parsing stops early
    #[arg(long)]
    strict: bool,

    #[command(flatten)]
    output: OutputArgs,
}

impl ParseArgs {
    pub fn run(self) -> Result<()> {
        let loader = IdlLoader::builder().strict(self.strict).build();
        let file = loader.parse_file(&self.input)?;
        self.output.write(&file)
    }
}
