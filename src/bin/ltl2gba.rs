//! Translates an LTL formula given on the command line into a generalized Büchi
//! automaton, prints a summary, and optionally writes a LaTeX derivation plus
//! Graphviz dumps of the formula tree and the automaton.

use ltl2gba::error::TranslateError;
use ltl2gba::report::{automaton_dot, formula_dot, latex_derivation};
use ltl2gba::result_print::{summarize, PrintOptions};
use ltl2gba::translate::{translate_with_trace, TranslateOptions};

use clap::builder::PossibleValuesParser;
use clap::Parser;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Structure to collect CLI arguments.
#[derive(Parser)]
#[clap(
    author = "Ondřej Huvar",
    version,
    about = "Translates a linear temporal logic formula into a generalized Büchi automaton."
)]
struct Arguments {
    /// The formula, in prefix notation (e.g. "U a (X b)").
    formula: String,

    /// Write a LaTeX derivation to this path. A ".pdf" extension is replaced with
    /// ".tex"; any other or missing extension has ".tex" appended.
    #[clap(short = 'o', long)]
    output: Option<String>,

    /// Flip the free-variable mask scan direction.
    #[clap(short = 'r', long = "reverse-mask")]
    reverse_mask: bool,

    /// Choice of the amount of output regarding the resulting automaton.
    #[clap(short, long, default_value = "short", value_parser = PossibleValuesParser::new(["none", "short", "medium", "full"]))]
    print_option: String,
}

fn main() -> ExitCode {
    let args = Arguments::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Arguments) -> Result<(), TranslateError> {
    let options = TranslateOptions {
        reversed_mask: args.reverse_mask,
        max_states: None,
    };
    let translation = translate_with_trace(&args.formula, options)?;

    let print_option = match args.print_option.as_str() {
        "none" => PrintOptions::NoPrint,
        "medium" => PrintOptions::MediumPrint,
        "full" => PrintOptions::FullPrint,
        _ => PrintOptions::ShortPrint,
    };
    summarize(&translation, print_option);

    if let Some(output) = &args.output {
        let tex_path = latex_output_path(output);
        std::fs::write(&tex_path, latex_derivation(&translation))
            .unwrap_or_else(|e| panic!("failed to write {}: {e}", tex_path.display()));

        std::fs::write("ltl_before_transform.dot", formula_dot(&translation.source))
            .expect("failed to write ltl_before_transform.dot");
        std::fs::write("ltl_after_transform.dot", formula_dot(&translation.normalized))
            .expect("failed to write ltl_after_transform.dot");
        std::fs::write("automaton.dot", automaton_dot(&translation.automaton))
            .expect("failed to write automaton.dot");
    }

    Ok(())
}

/// Substitute a ".pdf" extension with ".tex"; append ".tex" if the path has any other
/// extension or none at all.
fn latex_output_path(output: &str) -> PathBuf {
    let path = Path::new(output);
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("pdf") => path.with_extension("tex"),
        Some("tex") => path.to_path_buf(),
        _ => PathBuf::from(format!("{output}.tex")),
    }
}
