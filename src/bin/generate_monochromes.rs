use std::process::ExitCode;

use unsig_classifiers::config::JobConfig;
use unsig_classifiers::job::run_monochromes;

fn main() -> ExitCode {
    env_logger::init();

    match JobConfig::from_current_dir().and_then(|config| run_monochromes(&config)) {
        Ok(summary) => {
            println!("\nFound {} monochromes", summary.matched);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Monochrome job failed: {e:#}");
            eprintln!("Error generating monochromes: {e:#}");
            ExitCode::FAILURE
        }
    }
}
