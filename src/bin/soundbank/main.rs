//! soundbank - render the preset sounds and inspect them in the terminal
//!
//! Run with: cargo run -- [--seed INT] [--sample-rate HZ] [--sound NAME] [--list]

mod args;
mod report;
mod ui;

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use saavy_bank::{RenderConfig, SoundBank};

use ui::Inspector;

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let args = args::parse();
    env_logger::init();

    let mut config = RenderConfig::new().with_sample_rate(args.sample_rate);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    // Everything is rendered up front; the UI only ever reads
    let bank = SoundBank::presets(&config);

    let selected = match &args.sound {
        Some(name) => {
            bank.get(name)
                .wrap_err("--sound must name one of the preset sounds")?;
            bank.names().position(|n| n == name).unwrap_or(0)
        }
        None => 0,
    };

    if args.list {
        report::print_table(&bank);
        return Ok(());
    }

    let mut terminal = ratatui::init();
    let result = Inspector::new(&bank, selected).run(&mut terminal);
    ratatui::restore();
    result
}
