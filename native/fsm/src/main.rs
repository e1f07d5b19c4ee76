mod cli;

use std::io::{self, BufRead};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{AutomatonKind, Cli};
use fsm::{Recognizer, load_dfa, load_nfa};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(&cli, io::stdin().lock());
    if let Err(err) = &result {
        eprintln!("error: {err:#}");
    }
    ExitCode::from(status(&result))
}

/// 0 when every word was accepted, 1 when any was rejected, 2 when the automaton did not load.
fn status(result: &anyhow::Result<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Returns whether every word was accepted. Words come from `input` when none are given.
fn run(cli: &Cli, input: impl BufRead) -> anyhow::Result<bool> {
    let path = &cli.file;
    match cli.kind {
        AutomatonKind::Dfa => {
            let dfa = load_dfa(path)
                .with_context(|| format!("cannot load DFA from {}", path.display()))?;
            info!(states = dfa.graph().num_states(), total = dfa.is_total(), "loaded dfa");
            debug!("dfa\n{}", dfa.graph());
            check_all(&dfa, cli, input)
        }
        AutomatonKind::Nfa => {
            let nfa = load_nfa(path)
                .with_context(|| format!("cannot load NFA from {}", path.display()))?;
            info!(states = nfa.graph().num_states(), "loaded nfa");
            debug!("nfa\n{}", nfa.graph());
            check_all(&nfa, cli, input)
        }
    }
}

fn check_all<R: Recognizer>(
    automaton: &R,
    cli: &Cli,
    input: impl BufRead,
) -> anyhow::Result<bool> {
    let words = if cli.words.is_empty() {
        read_words(input).context("cannot read words from stdin")?
    } else {
        cli.words.clone()
    };

    let mut all_accepted = true;
    for word in &words {
        let (accepted, verdict) = verdict(automaton, word);
        all_accepted &= accepted;
        println!("{word:?}: {verdict}");
    }
    Ok(all_accepted)
}

fn read_words(reader: impl BufRead) -> io::Result<Vec<String>> {
    reader
        .lines()
        .map(|line| line.map(|line| line.trim().to_owned()))
        .collect()
}

fn verdict<R: Recognizer>(automaton: &R, word: &str) -> (bool, String) {
    match automaton.try_accepts(word) {
        Ok(true) => (true, "accepted".to_owned()),
        Ok(false) => (false, "rejected".to_owned()),
        Err(invalid) => (false, format!("rejected ({invalid})")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsm::{Nfa, TransitionGraph};
    use std::path::{Path, PathBuf};

    fn demo(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
    }

    fn cli(file: PathBuf, kind: AutomatonKind, words: &[&str]) -> Cli {
        Cli {
            file,
            kind,
            verbose: false,
            words: words.iter().map(|w| (*w).to_owned()).collect(),
        }
    }

    fn nfa() -> Nfa {
        TransitionGraph::builder()
            .with_states(["q0", "q1"])
            .with_symbols(['a'])
            .with_start_state("q0")
            .with_accept_states(["q1"])
            .with_transition("q0", 'a', "q1")
            .build()
            .unwrap()
            .into()
    }

    #[test]
    fn verdicts() {
        let nfa = nfa();
        assert_eq!(verdict(&nfa, "a"), (true, "accepted".to_owned()));
        assert_eq!(verdict(&nfa, "aa"), (false, "rejected".to_owned()));
        assert_eq!(
            verdict(&nfa, "ab"),
            (
                false,
                "rejected (invalid symbol 'b' at position 1)".to_owned()
            )
        );
    }

    #[test]
    fn words_are_trimmed_lines() {
        let words = read_words(" ab \n\nba\r\n".as_bytes()).unwrap();
        assert_eq!(words, vec!["ab", "", "ba"]);
    }

    #[test]
    fn all_accepted_is_success() {
        let nfa = cli(demo("ends_with_abb.nfa.json"), AutomatonKind::Nfa, &["abb", "babb"]);
        let result = run(&nfa, io::empty());
        assert_eq!(status(&result), 0);
        assert!(result.unwrap());

        let dfa = cli(demo("mod_three.dfa.json"), AutomatonKind::Dfa, &["", "11", "110"]);
        assert!(run(&dfa, io::empty()).unwrap());
    }

    #[test]
    fn any_rejection_is_failure() {
        let nfa = cli(demo("ends_with_abb.nfa.json"), AutomatonKind::Nfa, &["abb", "ab"]);
        let result = run(&nfa, io::empty());
        assert_eq!(status(&result), 1);
        assert!(!result.unwrap());

        let invalid = cli(demo("ends_with_abb.nfa.json"), AutomatonKind::Nfa, &["abc"]);
        assert!(!run(&invalid, io::empty()).unwrap());
    }

    #[test]
    fn words_fall_back_to_input() {
        let dfa = cli(demo("mod_three.dfa.json"), AutomatonKind::Dfa, &[]);
        assert!(run(&dfa, "11\n 1001 \n".as_bytes()).unwrap());
        assert!(!run(&dfa, "11\n1\n".as_bytes()).unwrap());
    }

    #[test]
    fn missing_file_reports_its_cause_once() {
        let path = demo("no_such_automaton.json");
        let result = run(&cli(path.clone(), AutomatonKind::Dfa, &["1"]), io::empty());
        assert_eq!(status(&result), 2);
        let err = result.unwrap_err();
        let cause = err.root_cause().to_string();
        assert_eq!(
            format!("{err:#}"),
            format!(
                "cannot load DFA from {p}: failed to read {p}: {cause}",
                p = path.display()
            )
        );
    }

    #[test]
    fn nfa_file_is_not_a_dfa() {
        let path = demo("ends_with_abb.nfa.json");
        let err = run(&cli(path.clone(), AutomatonKind::Dfa, &["abb"]), io::empty()).unwrap_err();
        let cause = err.root_cause().to_string();
        let rendered = format!("{err:#}");
        assert!(rendered.starts_with(&format!(
            "cannot load DFA from {}: malformed automaton description: ",
            path.display()
        )));
        assert_eq!(rendered.matches(cause.as_str()).count(), 1);
    }

    #[test]
    fn invalid_description_is_an_error() {
        let path = std::env::temp_dir().join(format!("fsm-cli-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"states": ["q0"], "symbols": ["a"], "start_state": "q1", "accept_states": ["q0"]}"#,
        )
        .unwrap();
        let result = run(&cli(path.clone(), AutomatonKind::Nfa, &["a"]), io::empty());
        std::fs::remove_file(&path).unwrap();

        let rendered = format!("{:#}", result.unwrap_err());
        assert!(rendered.ends_with(r#"start state "q1" is not in the set of states"#));
    }
}
