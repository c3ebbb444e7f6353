//! Print results of a translation, either an aggregated summary only or a full,
//! colorized listing of every state.

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use std::io::Write;

use crate::subformula::Status;
use crate::translate::Translation;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PrintOptions {
    NoPrint,
    ShortPrint,
    MediumPrint,
    FullPrint,
}

/// Print the given text, but only if the print options are at least medium. Keeps the
/// call sites below free of repeated `if` checks.
pub(crate) fn print_if_allowed(text: String, print_options: PrintOptions) {
    if print_options == PrintOptions::NoPrint || print_options == PrintOptions::ShortPrint {
        return;
    }
    println!("{text}");
}

/// Print the aggregate shape of a translation — state/initial/accepting counts, and
/// (at medium or above) the normal form — then, at full verbosity, every state.
pub fn summarize(translation: &Translation, print_options: PrintOptions) {
    if print_options == PrintOptions::NoPrint {
        return;
    }

    let automaton = &translation.automaton;
    println!(
        "{} states, {} initial, {} accepting set(s)",
        automaton.state_count(),
        automaton.initial().len(),
        automaton.accepting_set_count()
    );
    print_if_allowed(format!("normal form: {}", translation.normalized), print_options);

    if print_options == PrintOptions::FullPrint {
        print_states(translation);
    }
}

/// Print one colored line per state: green/bold for initial, cyan for accepting (in any
/// set), white otherwise, followed by its atom assignment as a conjunction of literals.
fn print_states(translation: &Translation) {
    let automaton = &translation.automaton;
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    for (i, state) in translation.states.iter().enumerate() {
        let is_initial = automaton.initial().contains(&i);
        let is_accepting =
            (0..automaton.accepting_set_count()).any(|set| automaton.accepting(set).contains(&i));

        if is_initial {
            stdout
                .set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))
                .unwrap();
        } else if is_accepting {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan))).unwrap();
        } else {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::White))).unwrap();
        }

        let assignment = translation
            .index
            .atoms
            .iter()
            .map(|&idx| {
                let literal = translation.index.all[idx].to_string();
                if state[idx] == Status::True {
                    literal
                } else {
                    format!("~{literal}")
                }
            })
            .collect::<Vec<_>>()
            .join(" & ");

        writeln!(&mut stdout, "s{i}: {assignment}").unwrap();
    }

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::White))).unwrap();
    writeln!(&mut stdout, "-----").unwrap();
    stdout.reset().unwrap();
}
