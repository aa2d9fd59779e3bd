use std::io::{self, BufWriter};
use std::process;

use infoline::filter;

fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let output = BufWriter::new(stdout.lock());

    if let Err(e) = filter::run(stdin.lock(), output) {
        eprintln!("infoline: {}", e);
        process::exit(1);
    }
}
