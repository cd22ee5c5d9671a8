use std::process;

fn main() {
    if let Err(err) = pupm_cli::run_cli() {
        eprintln!("pupm: {err:#}");
        process::exit(1);
    }
}
