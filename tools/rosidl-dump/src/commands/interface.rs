use anyhow::{Result, bail};
use clap::Args;
use rosidl::{IdlLoader, IdlTuple};
use tracing::error;

use crate::output::OutputArgs;

#[derive(Args)]
pub struct InterfaceArgs {
    /// Interface files as `<base_dir>:<relative_path>`
    #[arg(required = true)]
    tuples: Vec<IdlTuple>,

    /// Fail on files that do not parse to the end
    #[arg(long)]
    strict: bool,

    #[command(flatten)]
    output: OutputArgs,
}

impl InterfaceArgs {
    pub fn run(self) -> Result<()> {
        let loader = IdlLoader::builder().strict(self.strict).build();

        let mut models = Vec::with_capacity(self.tuples.len());
        let mut failed = 0;
        for (tuple, result) in self.tuples.iter().zip(loader.load_all(&self.tuples)) {
            match result {
                Ok(model) => models.push(model),
                Err(err) => {
                    error!(interface = %tuple, "{err}");
                    failed += 1;
                }
            }
        }
        self.output.write(&models)?;

        if failed > 0 {
            bail!("{failed} of {} interface files failed to load", self.tuples.len());
        }
        Ok(())
    }
}
