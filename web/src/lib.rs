use clap::Parser;
use wasm_bindgen::prelude::*;

mod board;
mod controls;
mod game;
mod header;
mod theme;
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
}

impl Args {
    /// Reads arguments from a location hash such as `#-vv&--seed=42`.
    fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window().location().hash().unwrap_or_default();
    let (args, parse_error) = match Args::from_hash(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (Args::default(), Some(err)),
    };

    if let Some(log_level) = args.verbose.log_level() {
        if let Err(err) = console_log::init_with_level(log_level) {
            gloo::console::error!(format!("Error initializing logger: {}", err));
        }
    }
    if let Some(err) = parse_error {
        log::warn!("Ignoring location hash {:?}: {}", location_hash, err);
    }
    log::debug!("seed: {:?}", args.seed);

    let props = game::GameProps { seed: args.seed };
    match document().get_element_by_id("game") {
        Some(root) => {
            log::debug!("App started");
            yew::Renderer::<game::GameView>::with_root_and_props(root, props).render();
        }
        None => {
            log::warn!("No id=\"game\" element, mounting on body");
            yew::Renderer::<game::GameView>::with_props(props).render();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_uses_defaults() {
        let args = Args::from_hash("").unwrap();

        assert_eq!(args.seed, None);
    }

    #[test]
    fn hash_carries_seed_and_verbosity() {
        let args = Args::from_hash("#-vv&--seed=42").unwrap();

        assert_eq!(args.seed, Some(42));
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
    }

    #[test]
    fn bad_seed_is_rejected() {
        assert!(Args::from_hash("#--seed=lots").is_err());
    }
}
