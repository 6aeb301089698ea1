use clap::{Command, CommandFactory, Parser};
use clap_complete::{generate, Generator};
use librarium::cli::args::Cli;
use librarium::cli::Session;
use librarium::config::Settings;
use librarium::infrastructure::StdConsole;
use std::io;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

fn main() {
    let cli = Cli::parse();

    if let Some(generator) = cli.generator {
        let mut cmd = Cli::command();
        eprintln!("Generating completion file for {generator:?}...");
        print_completions(generator, &mut cmd);
        return;
    }
    if cli.info {
        if let Some(a) = Cli::command().get_author() {
            println!("AUTHOR: {}", a)
        }
        if let Some(v) = Cli::command().get_version() {
            println!("VERSION: {}", v)
        }
        match effective_config() {
            Ok(toml_str) => {
                println!("CONFIG:");
                print!("{}", toml_str);
            }
            Err(e) => {
                librarium::cli::output::error(&e);
                std::process::exit(e.exit_code());
            }
        }
        return;
    }

    setup_logging(cli.debug);

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            librarium::cli::output::error(&e);
            std::process::exit(e.exit_code());
        }
    };
    if !settings.color {
        colored::control::set_override(false);
    }

    let mut console = StdConsole;
    let mut session = Session::new(&mut console, &settings);
    if let Err(e) = session.run() {
        librarium::cli::output::error(&e);
        std::process::exit(e.exit_code());
    }
}

/// Effective settings after layered loading, rendered as TOML for --info.
fn effective_config() -> Result<String, librarium::cli::CliError> {
    Settings::load()?.to_toml()
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Create a noisy module filter
    let noisy_modules: &[&str] = &[];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::ENTER)
        .with_span_events(FmtSpan::CLOSE);

    let filtered_layer = fmt_layer.with_filter(filter).with_filter(module_filter);

    tracing_subscriber::registry().with(filtered_layer).init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use librarium::util::testing;

    #[test]
    fn verify_cli() {
        testing::init_test_setup();
        Cli::command().debug_assert();
    }

    #[test]
    fn given_info_flag_when_rendering_config_then_toml_lists_all_settings() {
        let toml_str = effective_config().expect("load and render config");
        assert!(toml_str.contains("color"));
        assert!(toml_str.contains("prompt"));
    }
}
