use solidlib::base::{ConfigError, ConfigNode, Error, Parameters, SolidsInput};
use solidlib::material::create_solid_models;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "solidlib_check",
    about = "Builds the solid models described by a JSON input file and prints their parameter bindings"
)]
struct Options {
    /// Input file
    input: String,

    /// Logs each parameter binding while building the models
    #[structopt(short, long)]
    verbose: bool,

    /// Fails if some configuration keys are not used by the models
    #[structopt(long)]
    strict: bool,
}

fn main() -> Result<(), Error> {
    // parse options
    let options = Options::from_args();

    // logging (RUST_LOG overrides the verbosity flag)
    let level = if options.verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // load data
    let input = SolidsInput::read_json(&options.input)?;
    let parameters = input.parameters()?;
    let configs = input.solid_nodes()?;

    // build models
    match input.ndim {
        2 => build_and_report::<2>(&parameters, &configs, options.strict),
        3 => build_and_report::<3>(&parameters, &configs, options.strict),
        ndim => Err(ConfigError::UnsupportedDimension { ndim }.into()),
    }
}

fn build_and_report<const NDIM: usize>(
    parameters: &Parameters,
    configs: &[ConfigNode],
    strict: bool,
) -> Result<(), Error> {
    let models = create_solid_models::<NDIM>(parameters, configs)?;
    for (config, model) in configs.iter().zip(&models) {
        println!(
            "{} → {} ({} internal values)",
            config.path(),
            model.kind(),
            model.n_internal_values()
        );
        for (key, name) in model.bindings() {
            println!("    {} = {}", key, name);
        }
        let unused = config.unused_keys();
        if !unused.is_empty() {
            tracing::warn!(path = config.path(), keys = ?unused, "unused configuration keys");
            if strict {
                config.check_all_read()?;
            }
        }
    }
    println!("{} solid model(s) in {}D", models.len(), NDIM);
    Ok(())
}
