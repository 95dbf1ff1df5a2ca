use std::process::ExitCode;

use unsig_classifiers::config::JobConfig;
use unsig_classifiers::job::run_noliners;

fn main() -> ExitCode {
    env_logger::init();

    match JobConfig::from_current_dir().and_then(|config| run_noliners(&config)) {
        Ok(summary) => {
            println!("Found {} no-liners", summary.matched);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("No-liner job failed: {e:#}");
            eprintln!("Error generating no-liners: {e:#}");
            ExitCode::FAILURE
        }
    }
}
