fn main() {
    if let Err(err) = climbing_pyramid::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
