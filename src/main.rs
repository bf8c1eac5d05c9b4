// src/main.rs

use fidbatch::{cli, logging, run};

#[tokio::main]
async fn main() {
    let args = cli::parse();

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("[ERROR] failed to initialise logging: {err}");
        std::process::exit(2);
    }

    let code = match run(args).await {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("[ERROR] {err}");
            2
        }
    };
    std::process::exit(code);
}
