use std::env;
use std::process;

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use smart_calc::config::{Config, USAGE};
use smart_calc::{Outcome, Session};

/// Evaluates a single line given on the command line.
fn run_once(session: &mut Session, line: &str) -> i32 {
    match session.try_execute(line) {
        Ok(Outcome::Print(text)) | Ok(Outcome::Exit(text)) => {
            println!("{}", text);
            0
        }
        Ok(Outcome::Silent) => 0,
        Err(e) => {
            println!("{}", e);
            1
        }
    }
}

fn run_interactive(session: &mut Session) {
    let mut rl = match Editor::<(), DefaultHistory>::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to initialize the line editor: {}", e);
            process::exit(1);
        }
    };

    loop {
        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                println!("Bye!");
                break;
            }
            Err(e) => {
                eprintln!("Failed to read the input: {}", e);
                break;
            }
        };

        if !line.trim().is_empty() {
            let _ = rl.add_history_entry(line.as_str());
        }

        match session.execute(&line) {
            Outcome::Silent => {}
            Outcome::Print(text) => println!("{}", text),
            Outcome::Exit(text) => {
                println!("{}", text);
                break;
            }
        }
    }
}

fn main() {
    let config = match Config::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    if config.help {
        println!("{}", USAGE);
        return;
    }

    let mut session = Session::new().with_verbose(config.verbose);

    if let Some(line) = config.line {
        process::exit(run_once(&mut session, &line));
    }

    if config.banner {
        println!("Welcome to the Smart Calculator! Type /help for usage, /exit to quit.");
    }

    run_interactive(&mut session);
}
