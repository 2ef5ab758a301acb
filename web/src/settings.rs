use clap::Args;
use obake_core as game;

/// Round tuning read from the location hash. Unset fields keep the preset.
#[derive(Args, Debug, Default, Clone, PartialEq)]
pub(crate) struct RoundArgs {
    /// Short rounds with a constant number of items per tick
    #[arg(long)]
    fixed: bool,

    /// Length of a round in seconds
    #[arg(long)]
    round_seconds: Option<game::Seconds>,

    /// Items drawn on every sampling tick
    #[arg(long)]
    base_item_count: Option<game::CellCount>,

    /// Extra items drawn by the end of the round
    #[arg(long)]
    max_extra_items: Option<game::CellCount>,

    /// Chance for each drawn item to be an obake
    #[arg(long)]
    obake_rate: Option<f64>,

    #[arg(long)]
    grid_width: Option<game::Coord>,

    #[arg(long)]
    grid_height: Option<game::Coord>,

    /// Milliseconds between board resamples
    #[arg(long)]
    sample_interval_ms: Option<u32>,
}

impl RoundArgs {
    pub(crate) fn to_config(&self) -> game::Result<game::RoundConfig> {
        let preset = if self.fixed {
            game::RoundConfig::fixed()
        } else {
            game::RoundConfig::progressive()
        };

        game::RoundConfig {
            round_seconds: self.round_seconds.unwrap_or(preset.round_seconds),
            base_item_count: self.base_item_count.unwrap_or(preset.base_item_count),
            max_extra_items: self.max_extra_items.unwrap_or(preset.max_extra_items),
            obake_rate: self.obake_rate.unwrap_or(preset.obake_rate),
            grid_width: self.grid_width.unwrap_or(preset.grid_width),
            grid_height: self.grid_height.unwrap_or(preset.grid_height),
            sample_interval_ms: self.sample_interval_ms.unwrap_or(preset.sample_interval_ms),
        }
        .validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct Cli {
        #[command(flatten)]
        round: RoundArgs,
    }

    fn parse(args: &[&str]) -> game::Result<game::RoundConfig> {
        let cli = Cli::try_parse_from(core::iter::once("").chain(args.iter().copied()))
            .expect("arguments should parse");
        cli.round.to_config()
    }

    #[test]
    fn no_args_is_progressive() {
        assert_eq!(parse(&[]), Ok(game::RoundConfig::progressive()));
    }

    #[test]
    fn fixed_flag_selects_fixed_preset() {
        assert_eq!(parse(&["--fixed"]), Ok(game::RoundConfig::fixed()));
    }

    #[test]
    fn overrides_apply_on_top_of_preset() {
        let config = parse(&["--fixed", "--grid-width=3", "--obake-rate=0.5"]).unwrap();

        assert_eq!(config.grid_width, 3);
        assert_eq!(config.grid_height, 5);
        assert_eq!(config.obake_rate, 0.5);
        assert_eq!(config.round_seconds, 5);
    }

    #[test]
    fn invalid_override_fails_validation() {
        assert_eq!(
            parse(&["--sample-interval-ms=0"]),
            Err(game::GameError::InvalidSampleInterval)
        );
        assert_eq!(parse(&["--obake-rate=2"]), Err(game::GameError::InvalidObakeRate));
    }
}
