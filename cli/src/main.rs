mod args;
mod global_settings;
mod replay;

use crate::global_settings::GlobalSettings;
use crate::replay::{replay, DecimalIntensity};
use anyhow::Result;
use itertools::Itertools;
use log::info;

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .init();

    let args = crate::args::build_cli().get_matches();
    let settings = GlobalSettings::new(&args)?;

    let mut list = DecimalIntensity::new();
    let summary = replay(&mut list, &settings.operations, settings.strict)?;
    info!(
        "{} operations applied, {} rejected",
        summary.applied, summary.rejected
    );

    if settings.segments {
        println!("{}", list.segments().join("\n"));
    } else {
        println!("{}", list);
    }
    Ok(())
}
