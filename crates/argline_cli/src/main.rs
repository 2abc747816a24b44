//! argline CLI
//!
//! Reads its own invocation with the argline reader.

use std::io;

use argline::CommandLine;

fn main() {
    argline_cli::init_tracing();

    // The reader takes one command line; the process hands us split
    // arguments, so re-join them with quoting where needed.
    let mut args = CommandLine::from_args(
        std::env::args_os()
            .skip(1)
            .map(|arg| arg.to_string_lossy().into_owned()),
    );

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    if let Err(err) = argline_cli::run(&mut args, &mut stdin, &mut stdout) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
