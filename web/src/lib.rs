use clap::Parser;
use obake_core::RoundConfig;
use wasm_bindgen::prelude::*;

mod game;
mod settings;
mod utils;

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    #[command(flatten)]
    round: settings::RoundArgs,
}

/// Arguments come from the location hash, e.g. `#--fixed&--seed=7&-vv`.
fn parse_hash_args(location_hash: &str) -> Result<Args, clap::Error> {
    Args::try_parse_from(location_hash.split(['#', '&']))
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let (args, parse_error) = match parse_hash_args(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (Args::default(), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = parse_error {
        log::error!("could not parse location hash {:?}: {}", location_hash, err);
    }

    let config = args.round.to_config().unwrap_or_else(|err| {
        log::error!("invalid round config ({}), using default", err);
        RoundConfig::default()
    });
    let seed = args.seed.unwrap_or_else(utils::js_random_seed);
    log::debug!("seed: {}, config: {:?}", seed, config);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, game::GameProps { config, seed })
        .render();
}
