use std::{fs, path::PathBuf};

use anyhow::Result;
use clap::Args;
use serde::Serialize;

/// Where and how JSON is written.
#[derive(Args)]
pub struct OutputArgs {
    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write single-line JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

impl OutputArgs {
    pub fn write<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let text = if self.compact {
            serde_json::to_string(value)?
        } else {
            serde_json::to_string_pretty(value)?
        };

        match &self.output {
            Some(path) => fs::write(path, format!("{text}\n"))?,
            None => println!("{text}"),
        }
        Ok(())
    }
}
