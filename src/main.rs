// SPDX-License-Identifier: MPL-2.0
use budget_desk::app::{self, Flags};

const HELP: &str = "\
Budget Desk

USAGE:
  budget_desk [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language, e.g. en-US or fr
  --config-dir <DIR>     Directory holding settings.toml
  --log-level <FILTER>   tracing filter, e.g. debug or budget_desk=trace
  -h, --help             Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {remaining:?}");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        log_level: args.opt_value_from_str("--log-level")?,
    })
}
