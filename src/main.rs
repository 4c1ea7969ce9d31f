use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use build_bump::cli::orchestration::{
    run_bump, BumpArgs, EXIT_CONFIG_FAILED, EXIT_PUBSPEC_FAILED,
};
use build_bump::{config, logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "build-bump",
    version,
    about = "Increment the build number in pubspec.yaml and sync it to build.gradle"
)]
struct Args {
    #[arg(help = "Path to pubspec.yaml [default: pubspec.yaml]")]
    pubspec: Option<PathBuf>,

    #[arg(help = "Path to build.gradle [default: android/app/build.gradle]")]
    gradle: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Preview the new version without writing files")]
    dry_run: bool,

    #[arg(long, help = "Only bump pubspec.yaml")]
    skip_gradle: bool,

    #[arg(long, help = "Token marking Gradle properties delegated to tooling defaults")]
    marker: Option<String>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
}

impl Args {
    /// Merge command-line overrides on top of the loaded configuration
    fn into_bump_args(self, config: &config::Config) -> BumpArgs {
        let mut bump_args = BumpArgs::from_config(config);
        if let Some(pubspec) = self.pubspec {
            bump_args.paths.pubspec = pubspec;
        }
        if let Some(gradle) = self.gradle {
            bump_args.paths.gradle = gradle;
        }
        if let Some(marker) = self.marker {
            bump_args.delegation_marker = marker;
        }
        bump_args.skip_gradle |= self.skip_gradle;
        bump_args.dry_run = self.dry_run;
        bump_args
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = logging::init_logging(args.verbose) {
        ui::display_error(&e.to_string());
        std::process::exit(EXIT_CONFIG_FAILED);
    }

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(EXIT_CONFIG_FAILED);
        }
    };

    let bump_args = args.into_bump_args(&config);
    if let Err(e) = bump_args.validate() {
        ui::display_error(&e.to_string());
        std::process::exit(EXIT_CONFIG_FAILED);
    }

    ui::display_status(&format!(
        "Bumping build number in {}",
        bump_args.paths.pubspec.display()
    ));

    let report = match run_bump(&bump_args) {
        Ok(report) => report,
        Err(e) => {
            ui::display_error(&format!("Version bump failed: {}", e));
            std::process::exit(EXIT_PUBSPEC_FAILED);
        }
    };

    ui::display_report(&report, &bump_args);

    let code = report.exit_code();
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
