// SPDX-License-Identifier: MPL-2.0
use photofolio::app::{self, paths, Flags};
use photofolio::{content, logging};
use std::process::ExitCode;

/// Parses the flags, returning them along with the optional `--log` filter.
fn parse_args(args: &mut pico_args::Arguments) -> Result<(Flags, Option<String>), pico_args::Error> {
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        content_dir: args.opt_value_from_str("--content-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };
    let log = args.opt_value_from_str("--log")?;
    Ok((flags, log))
}

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    let (flags, log) = match parse_args(&mut args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("photofolio: {err}");
            eprintln!(
                "usage: photofolio [--content-dir DIR] [--config-dir DIR] [--lang LOCALE] [--log FILTER]"
            );
            return ExitCode::FAILURE;
        }
    };

    for extra in args.finish() {
        eprintln!("photofolio: ignoring unexpected argument {extra:?}");
    }

    if let Err(err) = logging::init(log.as_deref()) {
        eprintln!("photofolio: {err}");
    }

    paths::init_cli_overrides(flags.content_dir.clone(), flags.config_dir.clone());

    let content_dir = paths::get_content_dir();
    let content = match content::load_from_dir(&content_dir) {
        Ok(content) => content,
        Err(err) => {
            tracing::error!(%err, dir = %content_dir.display(), "failed to load content");
            eprintln!("photofolio: {err}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(flags, content) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application error");
            eprintln!("photofolio: {err}");
            ExitCode::FAILURE
        }
    }
}
