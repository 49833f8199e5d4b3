fn main() {
    if let Err(error) = wpt_results::run_cli() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
