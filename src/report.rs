//! LaTeX derivation and Graphviz dumps — the presentation layer spec.md places outside
//! the core contract. This module only renders documents; it never shells out to
//! `pdflatex` (see DESIGN.md's Open Question note on that boundary).

use crate::automaton::Automaton;
use crate::preprocessing::operators::{Atom, BinaryOp, UnaryOp};
use crate::preprocessing::tree::{Formula, NodeKind};
use crate::rewrite::find_definitions;
use crate::subformula::Status;
use crate::translate::Translation;

use std::fmt::Write as _;

const DEFINITION_NAMES: &[&str] = &[
    "\\alpha",
    "\\beta",
    "\\gamma",
    "\\delta",
    "\\varepsilon",
    "\\zeta",
    "\\eta",
    "\\vartheta",
    "\\mu",
    "\\nu",
    "\\xi",
    "\\rho",
    "\\sigma",
    "\\chi",
    "\\psi",
    "\\omega",
];

const PREAMBLE: &str = r"\documentclass[a4paper, 11pt]{article}
\usepackage[T2A]{fontenc}
\usepackage[utf8]{inputenc}
\usepackage{graphicx}
\usepackage{xcolor}
\usepackage{color}
\usepackage{hyperref}
\usepackage{amsmath}
\usepackage{amssymb}
\usepackage{multirow}
\usepackage[left=10mm,right=10mm,top=10mm,bottom=15mm]{geometry}
\newcommand{\TRUE}{\mathtt{true}}
\newcommand{\FALSE}{\mathtt{false}}
\newcommand{\NEXT}{\mathbf{X}}
\newcommand{\FUTURE}{\mathbf{F}}
\newcommand{\GLOBALLY}{\mathbf{G}}
\newcommand{\UNTIL}{\hspace{0.1cm}\mathbf{U}\hspace{0.1cm}}
\newcommand{\WEAK}{\hspace{0.1cm}\mathbf{W}\hspace{0.1cm}}
\newcommand{\RELEASE}{\hspace{0.1cm}\mathbf{R}\hspace{0.1cm}}
\newcommand{\NOT}{\mathbf{\neg}}
\newcommand{\AND}{\hspace{0.1cm}\mathbf{\wedge}\hspace{0.1cm}}
\newcommand{\OR}{\hspace{0.1cm}\mathbf{\vee}\hspace{0.1cm}}
\newcommand{\IMPL}{\hspace{0.1cm}\mathbf{\rightarrow}\hspace{0.1cm}}
\begin{document}
";

const ENDING: &str = "\n\\end{document}\n";

fn to_latex(formula: &Formula, definitions: &[Formula]) -> String {
    match &formula.node {
        NodeKind::Terminal(Atom::True) => "\\TRUE".to_string(),
        NodeKind::Terminal(Atom::False) => "\\FALSE".to_string(),
        NodeKind::Terminal(Atom::Prop(name)) => name.clone(),
        NodeKind::Unary(UnaryOp::Not, child) => format!("\\NOT {}", to_latex(child, definitions)),
        NodeKind::Unary(UnaryOp::X, child) => format!("\\NEXT {}", to_latex(child, definitions)),
        NodeKind::Unary(UnaryOp::F, child) => format!("\\FUTURE {}", to_latex(child, definitions)),
        NodeKind::Unary(UnaryOp::G, child) => format!("\\GLOBALLY {}", to_latex(child, definitions)),
        NodeKind::Binary(BinaryOp::And, l, r) => {
            format!("({} \\AND {})", to_latex(l, definitions), to_latex(r, definitions))
        }
        NodeKind::Binary(BinaryOp::Or, l, r) => {
            format!("({} \\OR {})", to_latex(l, definitions), to_latex(r, definitions))
        }
        NodeKind::Binary(BinaryOp::Impl, l, r) => {
            format!("({} \\IMPL {})", to_latex(l, definitions), to_latex(r, definitions))
        }
        NodeKind::Binary(BinaryOp::U, l, r) => match definitions.iter().position(|d| d == formula) {
            Some(idx) => DEFINITION_NAMES
                .get(idx)
                .map(|s| (*s).to_string())
                .unwrap_or_else(|| format!("D_{{{idx}}}")),
            None => format!("({} \\UNTIL {})", to_latex(l, definitions), to_latex(r, definitions)),
        },
        NodeKind::Binary(BinaryOp::R, l, r) => {
            format!("({} \\RELEASE {})", to_latex(l, definitions), to_latex(r, definitions))
        }
        NodeKind::Binary(BinaryOp::W, l, r) => {
            format!("({} \\WEAK {})", to_latex(l, definitions), to_latex(r, definitions))
        }
    }
}

fn state_truth_list(index: &crate::subformula::SubformulaIndex, state: &[Status], definitions: &[Formula]) -> String {
    let entries: Vec<String> = index
        .all
        .iter()
        .zip(state.iter())
        .filter(|(_, status)| **status == Status::True)
        .map(|(formula, _)| to_latex(formula, definitions))
        .collect();
    if entries.is_empty() {
        "\\varnothing".to_string()
    } else {
        entries.join(", ")
    }
}

/// Render the full derivation as a standalone LaTeX document: the formula, its
/// normal form, a per-state truth listing, the initial set, every accepting set, and
/// the transition relation. Does not invoke `pdflatex`.
pub fn latex_derivation(translation: &Translation) -> String {
    let definitions = find_definitions(&translation.normalized);
    let mut out = String::new();

    out.push_str(PREAMBLE);
    writeln!(
        out,
        "\\section*{{Formula}}\n$$\\varphi = {}$$",
        to_latex(&translation.source, &[])
    )
    .unwrap();
    writeln!(
        out,
        "\\section*{{Normal form}}\n$$\\varphi = {}$$",
        to_latex(&translation.normalized, &definitions)
    )
    .unwrap();

    writeln!(out, "\\section*{{States}}\n\\begin{{itemize}}").unwrap();
    for (i, state) in translation.states.iter().enumerate() {
        writeln!(
            out,
            "\\item $s_{{{}}}: {}$",
            i + 1,
            state_truth_list(&translation.index, state, &definitions)
        )
        .unwrap();
    }
    writeln!(out, "\\end{{itemize}}").unwrap();

    let initial_list = translation
        .automaton
        .initial()
        .iter()
        .map(|&s| format!("s_{{{}}}", s + 1))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "\\section*{{Initial states}}\n$$I = \\{{{initial_list}\\}}$$").unwrap();

    writeln!(out, "\\section*{{Accepting sets}}\n\\begin{{itemize}}").unwrap();
    for set_index in 0..translation.automaton.accepting_set_count() {
        let set_list = translation
            .automaton
            .accepting(set_index)
            .iter()
            .map(|&s| format!("s_{{{}}}", s + 1))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "\\item $F_{{{set_index}}} = \\{{{set_list}\\}}$").unwrap();
    }
    writeln!(out, "\\end{{itemize}}").unwrap();

    writeln!(out, "\\section*{{Transitions}}\n\\begin{{itemize}}").unwrap();
    for from in 0..translation.automaton.state_count() {
        let targets = translation
            .automaton
            .transitions(from)
            .iter()
            .map(|&to| format!("s_{{{}}}", to + 1))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "\\item $\\delta(s_{{{}}}) = \\{{{targets}\\}}$", from + 1).unwrap();
    }
    writeln!(out, "\\end{{itemize}}").unwrap();

    out.push_str(ENDING);
    out
}

fn unary_label(op: UnaryOp) -> &'static str {
    match op {
        UnaryOp::Not => "not",
        UnaryOp::X => "next",
        UnaryOp::F => "future",
        UnaryOp::G => "globally",
    }
}

fn binary_label(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::And => "and",
        BinaryOp::Or => "or",
        BinaryOp::Impl => "implication",
        BinaryOp::U => "until",
        BinaryOp::R => "release",
        BinaryOp::W => "weak until",
    }
}

fn record_label(formula: &Formula) -> String {
    match &formula.node {
        NodeKind::Terminal(Atom::True) => "true".to_string(),
        NodeKind::Terminal(Atom::False) => "false".to_string(),
        NodeKind::Terminal(Atom::Prop(name)) => name.clone(),
        NodeKind::Unary(op, _) => format!("{{{op}|{}}}", unary_label(*op)),
        NodeKind::Binary(op, _, _) => format!("{{{op}|{}}}", binary_label(*op)),
    }
}

/// Dump a formula tree as Graphviz, one record-shaped node per subformula and `.lhs`
/// / `.rhs` labeled edges — the shape `dump_to`/`recursive_dump_to` produce.
pub fn formula_dot(formula: &Formula) -> String {
    let mut out = String::new();
    writeln!(out, "digraph G {{\n\trankdir=LR;").unwrap();
    let mut counter = 0usize;
    dump_node(formula, &mut out, &mut counter);
    writeln!(out, "}}").unwrap();
    out
}

fn dump_node(formula: &Formula, out: &mut String, counter: &mut usize) -> usize {
    let id = *counter;
    *counter += 1;
    writeln!(out, "\tn{id}[label=\"{}\", shape=\"record\"]", record_label(formula)).unwrap();
    if let Some(child) = formula.lhs() {
        let child_id = dump_node(child, out, counter);
        writeln!(out, "\tn{id} -> n{child_id}[label=\".lhs\"]").unwrap();
    }
    if let Some(child) = formula.rhs() {
        let child_id = dump_node(child, out, counter);
        writeln!(out, "\tn{id} -> n{child_id}[label=\".rhs\"]").unwrap();
    }
    id
}

/// Dump the automaton as Graphviz: dangling arrows into initial states, double circles
/// for accepting states — the shape `write_graph_to` produces.
pub fn automaton_dot(automaton: &Automaton) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "digraph G {{\n\tgraph[dpi = 400];\n\tlayout=\"circo\";\n\trankdir=TB;"
    )
    .unwrap();

    for i in 0..automaton.initial().len() {
        writeln!(out, "\tn{i}[label=\"\",shape=none,height=.0,width=.0]").unwrap();
    }
    writeln!(out).unwrap();

    for state in 0..automaton.state_count() {
        let is_accepting =
            (0..automaton.accepting_set_count()).any(|set| automaton.accepting(set).contains(&state));
        if is_accepting {
            writeln!(out, "\ts{}[shape=\"circle\", peripheries=2]", state + 1).unwrap();
        } else {
            writeln!(out, "\ts{}[shape=\"circle\"]", state + 1).unwrap();
        }
    }
    writeln!(out).unwrap();

    for (i, &init) in automaton.initial().iter().enumerate() {
        writeln!(out, "\tn{i}->s{}", init + 1).unwrap();
    }
    writeln!(out).unwrap();

    for from in 0..automaton.state_count() {
        for &to in automaton.transitions(from) {
            writeln!(out, "\ts{}->s{}", from + 1, to + 1).unwrap();
        }
    }

    writeln!(out, "}}").unwrap();
    out
}
