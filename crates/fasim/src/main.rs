mod cli;

use crate::cli::{Cli, Command};
use anyhow::Result;
use clap::Parser;
use fasim::automaton::Automaton;
use fasim::loader;
use std::io::{self, BufRead, Lines, StdinLock, Write};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Check { file, input, trace } => check(&file, &input, trace),
        Command::Shell { file } => shell(file),
    }
}

fn check(file: &Path, input: &str, trace: bool) -> Result<()> {
    let automaton = loader::load_path(file)?;
    if trace {
        let run = automaton.run(input);
        print_trace(&run.trace);
        report(run.accepted);
    } else {
        report(automaton.accepts(input));
    }
    Ok(())
}

fn report(accepted: bool) {
    println!("{}", if accepted { "accepted" } else { "rejected" });
}

fn print_trace(trace: &[fasim::automaton::StateSet]) {
    for (consumed, states) in trace.iter().enumerate() {
        if consumed == 0 {
            println!("start           {states:?}");
        } else {
            println!("after symbol {consumed:>2} {states:?}");
        }
    }
}

/// Interactive loop over description files and candidate strings,
/// reading line-oriented answers from stdin.
fn shell(file: Option<PathBuf>) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut path = match file {
        Some(path) => path,
        None => match ask(&mut lines, "Description file path: ")? {
            Some(answer) => PathBuf::from(answer),
            None => return Ok(()),
        },
    };

    loop {
        let automaton = match loader::load_path(&path) {
            Ok(automaton) => automaton,
            Err(err) => {
                eprintln!("could not load {}: {err}", path.display());
                match ask(&mut lines, "Description file path: ")? {
                    Some(answer) => path = PathBuf::from(answer),
                    None => return Ok(()),
                }
                continue;
            }
        };
        describe(&path, &automaton);

        loop {
            let Some(input) = ask(&mut lines, "String to check: ")? else {
                return Ok(());
            };
            report(automaton.accepts(&input));

            match ask(&mut lines, "Check another string (y/n)? ")? {
                Some(answer) if is_yes(&answer) => {}
                _ => break,
            }
        }

        match ask(&mut lines, "Load a different description (y/n)? ")? {
            Some(answer) if is_yes(&answer) => {}
            _ => return Ok(()),
        }
        match ask(&mut lines, "Description file path: ")? {
            Some(answer) => path = PathBuf::from(answer),
            None => return Ok(()),
        }
    }
}

fn describe(path: &Path, automaton: &Automaton) {
    println!(
        "loaded {} ({} states, {} input symbols, initial state {})",
        path.display(),
        automaton.state_count(),
        automaton.alphabet().len(),
        automaton.initial_state(),
    );
}

/// Prompt and read one trimmed line; `None` on end of input.
fn ask(lines: &mut Lines<StdinLock<'_>>, message: &str) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    Ok(lines.next().transpose()?.map(|line| line.trim().to_owned()))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes")
}
