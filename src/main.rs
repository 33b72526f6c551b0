fn main() {
    if let Err(err) = netgram_renderer::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
