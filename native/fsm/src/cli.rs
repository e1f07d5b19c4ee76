use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "fsm",
    about = "Check words against a finite automaton described in JSON",
    version
)]
pub struct Cli {
    /// Path to the JSON file containing the automaton
    #[arg(short, long)]
    pub file: PathBuf,
    /// Type of the automaton
    #[arg(
        short = 't',
        long = "type",
        value_enum,
        ignore_case = true,
        default_value_t = AutomatonKind::Dfa
    )]
    pub kind: AutomatonKind,
    /// Log simulation steps to stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
    /// Words to check; one per line from stdin when none are given
    pub words: Vec<String>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum AutomatonKind {
    Dfa,
    Nfa,
}
