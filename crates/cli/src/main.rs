fn main() {
    if let Err(error) = pdf_spaces_cli::run(std::env::args_os()) {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
