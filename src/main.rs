use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;

/// plank runs programs written in a small begin/end scripting language over
/// integers and strings.
///
/// Every argument is a file name, including ones that start with `-`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// The program to run. The program is read from standard input when no
    /// file is given.
    #[arg(allow_hyphen_values = true)]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let source = match args.files.as_slice() {
        [] => {
            let mut source = String::new();
            if io::stdin().read_to_string(&mut source).is_err() {
                println!("COULD NOT OPEN <stdin>");
                return ExitCode::FAILURE;
            }
            source
        },
        [path] => match fs::read_to_string(path) {
            Ok(source) => source,
            Err(_) => {
                println!("COULD NOT OPEN {}", path.display());
                return ExitCode::FAILURE;
            },
        },
        _ => {
            println!("TOO MANY FILENAMES");
            return ExitCode::FAILURE;
        },
    };

    let mut stdout = io::stdout().lock();
    match plank::run(&source, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if writeln!(stdout, "RUNTIME ERROR {e}").is_err() {
                eprintln!("RUNTIME ERROR {e}");
            }
            ExitCode::FAILURE
        },
    }
}
