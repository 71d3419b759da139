use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use nrx_core::Expr;
use nrx_psi4::{assemble, to_json, AdmInputs, NullTetrad, Psi4Config, Psi4Report};
use tracing::info;

#[derive(Args, Debug, Default)]
pub struct Psi4Args {
    /// YAML configuration naming the input symbols and tetrad.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Use the flat slice instead of declared symbolic inputs.
    #[arg(long)]
    pub flat: bool,
    /// Include the rendered expressions in the report.
    #[arg(long)]
    pub expr: bool,
}

pub fn load_config(args: &Psi4Args) -> Result<Psi4Config, Box<dyn Error>> {
    match &args.config {
        Some(path) => Ok(Psi4Config::from_yaml_str(&fs::read_to_string(path)?)?),
        None => Ok(Psi4Config::default()),
    }
}

pub fn render(args: &Psi4Args) -> Result<String, Box<dyn Error>> {
    let config = load_config(args)?;
    let inputs = if args.flat {
        AdmInputs::<Expr>::flat()
    } else {
        AdmInputs::declared(&config)?
    };
    let tetrad = NullTetrad::declared(&config.tetrad);
    let psi4 = assemble(&inputs, &tetrad)?;
    info!(
        re_terms = psi4.re.num_terms(),
        im_terms = psi4.im.num_terms(),
        flat = args.flat,
        "assembled psi4"
    );
    let report = Psi4Report::build(&psi4, &inputs, args.expr || config.include_expressions);
    Ok(to_json(&report)?)
}

pub fn run(args: &Psi4Args) -> Result<(), Box<dyn Error>> {
    println!("{}", render(args)?);
    Ok(())
}
