use crate::global_settings::GlobalSettings;
use clap::{arg, Command};

pub(crate) fn build_cli() -> Command {
    Command::new("intensity")
        .version("0.1")
        .about("Apply range updates to a piecewise-constant intensity")
        .after_help(
            "Each OPERATION is MODE:FROM:TO:AMOUNT, for instance add:10:30:1 \
             or set:15:25:-2.  Use RUST_LOG=debug to trace every update.",
        )
        .arg_required_else_help(true) // show full help if nothing given
        .args(GlobalSettings::cli())
        .arg(arg!([OPERATION] ... "Operations to apply, in order"))
}

#[cfg(test)]
mod test {
    use super::build_cli;

    #[test]
    fn test_verify() {
        build_cli().debug_assert();
    }
}
