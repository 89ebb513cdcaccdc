fn main() {
    if let Err(err) = k8sdot::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
