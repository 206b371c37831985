//! Scalc CLI

use scalc::{init_tracing, parse_args, render, Command, USAGE};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    match command {
        Command::Help => println!("{USAGE}"),
        Command::Run { program, options } => match render(&program, &options) {
            Ok(lines) => {
                for line in lines {
                    println!("{line}");
                }
            }
            Err(problem) => {
                eprintln!("{problem}");
                std::process::exit(1);
            }
        },
    }
}
