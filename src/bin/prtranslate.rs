use env_logger::{Builder, Env};
use std::{env, io, process};

use prtranslate::cli::run;

fn main() {
    // Logs go to stderr, stdout only ever carries the result
    let env = Env::default().filter_or("RUST_LOG", "warn");
    Builder::from_env(env).init();

    let args: Vec<String> = env::args().collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run(&args, &mut out) {
        eprintln!("Failed to write output: {}", e);
        process::exit(1);
    }
}
