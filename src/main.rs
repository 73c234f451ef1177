use std::process;

fn main() {
    if let Err(e) = hofetch::app::run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
