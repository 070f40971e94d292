use clap::Parser;
use std::process::ExitCode;

use gtranslate::cli::commands::{configure, languages, translate};
use gtranslate::cli::{Args, Command};
use gtranslate::input::InputSource;
use gtranslate::logging;
use gtranslate::output::OutputConfig;
use gtranslate::translation;
use gtranslate::ui::Style;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let output_config = OutputConfig::from_flags(args.output.quiet, args.output.no_color);
    logging::init(args.output.verbose, output_config.no_color);
    output_config.install();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Some(Command::Languages { target, json }) => {
            languages::run_languages(&args.api, target.as_deref(), json).await
        }
        Some(Command::Configure { show }) => configure::run_configure(show),
        None => {
            let options = translate::TranslateOptions {
                source: InputSource::from_args(args.texts, args.file),
                to: args.to,
                from: args.from,
                api: args.api,
                show_detected: args.show_detected,
                json: args.json,
            };
            translate::run_translate(options).await
        }
    }
}

/// Prints an error to stderr, tagging client errors with their code.
///
/// Client error messages already embed their transport cause, so only
/// application errors print the rest of the chain.
fn report(err: &anyhow::Error) {
    if let Some(client_err) = err.downcast_ref::<translation::Error>() {
        eprintln!(
            "{} {client_err}",
            Style::error(format!("error[{}]:", client_err.code()))
        );
        return;
    }

    eprintln!("{} {err}", Style::error("error:"));
    for cause in err.chain().skip(1) {
        eprintln!("  {} {cause}", Style::secondary("caused by:"));
    }
}
