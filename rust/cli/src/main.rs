use std::io;

fn main() {
    cardfloor_cli::logging::init_logging();
    let code = cardfloor_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
