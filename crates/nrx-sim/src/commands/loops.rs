use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use nrx_loop::{LoopColumns, LoopText};
use tracing::info;

#[derive(Args, Debug, Default)]
pub struct LoopsArgs {
    /// YAML file holding the five loop columns; overrides the column flags.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Loop variables, outermost first.
    #[arg(long, value_delimiter = ',')]
    pub index: Vec<String>,
    /// Lower bounds.
    #[arg(long, value_delimiter = ',')]
    pub lower: Vec<String>,
    /// Upper bounds.
    #[arg(long, value_delimiter = ',')]
    pub upper: Vec<String>,
    /// Increments; every level steps by 1 when omitted.
    #[arg(long = "incr", value_delimiter = ',')]
    pub increment: Vec<String>,
    /// Annotation line for one level; repeat once per level, outermost first.
    /// Empty entries mean none. No annotations when omitted.
    #[arg(long, allow_hyphen_values = true)]
    pub pragma: Vec<String>,
}

impl LoopsArgs {
    pub fn columns(&self) -> Result<LoopColumns, Box<dyn Error>> {
        if let Some(path) = &self.config {
            return Ok(LoopColumns::from_yaml_str(&fs::read_to_string(path)?)?);
        }
        let fill = |column: &[String], value: &str| {
            if column.is_empty() {
                vec![value.to_string(); self.index.len()]
            } else {
                column.to_vec()
            }
        };
        Ok(LoopColumns {
            index: self.index.clone(),
            lower: self.lower.clone(),
            upper: self.upper.clone(),
            increment: fill(&self.increment, "1"),
            pragma: fill(&self.pragma, ""),
        })
    }
}

pub fn render(args: &LoopsArgs) -> Result<LoopText, Box<dyn Error>> {
    let nest = args.columns()?.to_nest()?;
    info!(depth = nest.depth(), "emitting loop nest");
    Ok(nest.render())
}

pub fn run(args: &LoopsArgs) -> Result<(), Box<dyn Error>> {
    let text = render(args)?;
    print!("{}{}", text.header, text.footer);
    Ok(())
}
