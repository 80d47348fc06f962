// SPDX-License-Identifier: MPL-2.0
//! Binary entry point: command line parsing, logging setup, and launch.

use submission_lens::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Submission Lens - assignment submission viewer

USAGE:
  submission_lens [OPTIONS]

OPTIONS:
  --lang <CODE>        UI language (e.g. en-US, fr)
  --i18n-dir <DIR>     Load .ftl catalogs from this directory instead of the embedded ones
  --config-dir <DIR>   Read and write settings.toml under this directory
  --domain <URL>       Platform domain, e.g. https://school.instructure.com
  --token <TOKEN>      Personal access token
  --course <ID>        Course to open
  --assignment <ID>    Assignment to open
  -h, --help           Print this help
";

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        domain: args.opt_value_from_str("--domain")?,
        token: args.opt_value_from_str("--token")?,
        course_id: args.opt_value_from_str("--course")?,
        assignment_id: args.opt_value_from_str("--assignment")?,
    })
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("error: {error}");
            eprintln!("{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {remaining:?}");
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    app::run(flags)
}
