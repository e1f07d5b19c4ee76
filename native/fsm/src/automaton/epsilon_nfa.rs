//! Epsilon Non-deterministic Finite Automaton (ε-NFA) acceptance by subset simulation.
//!
//! A run tracks the set of every state the automaton could occupy instead of exploring one path
//! at a time, so each state is expanded at most once per input character regardless of how many
//! paths lead to it.

use tracing::{debug, trace};

use crate::automaton::graph::TransitionGraph;
use crate::automaton::state::StateSet;
use crate::automaton::symbol::Alphabet;
use crate::automaton::traits::{Recognizer, Simulate};

/// An Epsilon Non-deterministic Finite Automaton.
#[derive(Debug, Clone)]
pub struct Nfa {
    graph: TransitionGraph,
}

impl Nfa {
    pub fn new(graph: TransitionGraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &TransitionGraph {
        &self.graph
    }
}

impl From<TransitionGraph> for Nfa {
    fn from(graph: TransitionGraph) -> Self {
        Self::new(graph)
    }
}

impl Recognizer for Nfa {
    type Run<'a> = NfaRun<'a>;

    fn alphabet(&self) -> &Alphabet {
        self.graph.alphabet()
    }

    fn start(&self) -> NfaRun<'_> {
        NfaRun::new(&self.graph)
    }
}

/// One simulation of an [`Nfa`], owning its active-state set.
#[derive(Debug, Clone)]
pub struct NfaRun<'a> {
    graph: &'a TransitionGraph,
    /// Every state the automaton could be in after the input consumed so far.
    active: StateSet,
}

impl<'a> NfaRun<'a> {
    fn new(graph: &'a TransitionGraph) -> Self {
        Self {
            graph,
            active: graph.epsilon_closure_of(graph.start_state()),
        }
    }

    pub fn active(&self) -> &StateSet {
        &self.active
    }

    /// Names of the active states, in declaration order.
    pub fn active_names(&self) -> Vec<&'a str> {
        self.graph.names_of(&self.active)
    }

    /// Whether no branch survives. A dead run can never accept again.
    pub fn is_dead(&self) -> bool {
        self.active.is_empty()
    }
}

impl Simulate for NfaRun<'_> {
    fn is_accepting(&self) -> bool {
        self.active.intersects(self.graph.accepting_states())
    }

    fn feed(&mut self, input: char) -> bool {
        let direct = match self.graph.alphabet().id(input) {
            Some(symbol) => self.graph.image(&self.active, symbol),
            None => StateSet::default(),
        };
        self.active = self.graph.epsilon_closure(&direct);

        trace!(symbol = %input, active = ?self.active_names(), "nfa step");

        if self.active.is_empty() {
            debug!(symbol = %input, "no live state left, rejecting");
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidSymbol;

    fn single_step() -> Nfa {
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

    /// Words over {a, b} ending in "abb".
    fn ends_with_abb() -> Nfa {
        TransitionGraph::builder()
            .with_states(["s", "x", "y", "z"])
            .with_symbols(['a', 'b'])
            .with_start_state("s")
            .with_accept_states(["z"])
            .with_transition("s", 'a', "s")
            .with_transition("s", 'b', "s")
            .with_transition("s", 'a', "x")
            .with_transition("x", 'b', "y")
            .with_transition("y", 'b', "z")
            .build()
            .unwrap()
            .into()
    }

    #[test]
    fn single_transition() {
        let nfa = single_step();
        assert!(nfa.accepts("a"));
        assert!(!nfa.accepts("aa"));
        assert!(!nfa.accepts(""));
    }

    #[test]
    fn closure_is_taken_before_the_first_symbol() {
        let nfa: Nfa = TransitionGraph::builder()
            .with_states(["q0", "q1", "q2"])
            .with_symbols(['a'])
            .with_start_state("q0")
            .with_accept_states(["q2"])
            .with_epsilon_transition("q0", "q1")
            .with_transition("q1", 'a', "q2")
            .build()
            .unwrap()
            .into();

        assert!(nfa.accepts("a"));
        assert!(!nfa.accepts(""));
        assert!(!nfa.accepts("aa"));
    }

    #[test]
    fn closure_is_taken_after_each_symbol() {
        let nfa: Nfa = TransitionGraph::builder()
            .with_states(["q0", "q1", "q2"])
            .with_symbols(['a'])
            .with_start_state("q0")
            .with_accept_states(["q2"])
            .with_transition("q0", 'a', "q1")
            .with_epsilon_transition("q1", "q2")
            .build()
            .unwrap()
            .into();

        assert!(nfa.accepts("a"));
    }

    #[test]
    fn empty_input_uses_start_closure() {
        let nfa: Nfa = TransitionGraph::builder()
            .with_states(["q0", "q1"])
            .with_symbols(['a'])
            .with_start_state("q0")
            .with_accept_states(["q1"])
            .with_epsilon_transition("q0", "q1")
            .build()
            .unwrap()
            .into();

        assert!(nfa.accepts(""));
    }

    #[test]
    fn nondeterministic_branches() {
        let nfa = ends_with_abb();
        assert!(nfa.accepts("abb"));
        assert!(nfa.accepts("babb"));
        assert!(nfa.accepts("aababb"));
        assert!(!nfa.accepts("ab"));
        assert!(!nfa.accepts("abba"));
        assert!(!nfa.accepts(""));
    }

    #[test]
    fn long_input_stays_linear() {
        let nfa = ends_with_abb();
        let mut word = "ab".repeat(20_000);
        word.push_str("abb");
        assert!(nfa.accepts(&word));
    }

    #[test]
    fn epsilon_cycles_do_not_loop() {
        let nfa: Nfa = TransitionGraph::builder()
            .with_states(["p", "q", "r"])
            .with_symbols(['a'])
            .with_start_state("p")
            .with_accept_states(["r"])
            .with_epsilon_transition("p", "q")
            .with_epsilon_transition("q", "p")
            .with_transition("q", 'a', "r")
            .with_epsilon_transition("r", "p")
            .build()
            .unwrap()
            .into();

        assert!(nfa.accepts("a"));
        assert!(nfa.accepts("aaa"));
        assert!(!nfa.accepts(""));
    }

    #[test]
    fn parallel_branches_do_not_change_the_verdict() {
        let single: Nfa = TransitionGraph::builder()
            .with_states(["s", "b0", "f"])
            .with_symbols(['a'])
            .with_start_state("s")
            .with_accept_states(["f"])
            .with_epsilon_transition("s", "b0")
            .with_transition("b0", 'a', "f")
            .build()
            .unwrap()
            .into();

        let mut builder = TransitionGraph::builder()
            .with_states(["s", "f"])
            .with_symbols(['a'])
            .with_start_state("s")
            .with_accept_states(["f"]);
        for k in 0..8 {
            let branch = format!("b{k}");
            builder = builder
                .with_states([branch.clone()])
                .with_epsilon_transition("s", branch.clone())
                .with_transition(branch, 'a', "f");
        }
        let many: Nfa = builder.build().unwrap().into();

        for word in ["", "a", "aa", "aaa"] {
            assert_eq!(single.accepts(word), many.accepts(word), "word {word:?}");
        }
    }

    #[test]
    fn dead_run_short_circuits() {
        let nfa = single_step();
        let mut run = nfa.start();
        assert!(run.feed('a'));
        assert!(run.is_accepting());
        assert!(!run.feed('a'));
        assert!(run.is_dead());
        assert!(!run.feed('a'));
        assert!(!run.is_accepting());
    }

    #[test]
    fn start_without_transitions_rejects_immediately() {
        let nfa: Nfa = TransitionGraph::builder()
            .with_states(["q0", "q1"])
            .with_symbols(['a'])
            .with_start_state("q0")
            .with_accept_states(["q1"])
            .build()
            .unwrap()
            .into();

        let mut run = nfa.start();
        assert!(!run.feed('a'));
        assert!(!nfa.accepts("a"));
    }

    #[test]
    fn run_exposes_active_states() {
        let nfa = ends_with_abb();
        let mut run = nfa.start();
        assert_eq!(run.active_names(), vec!["s"]);
        run.feed('a');
        assert_eq!(run.active_names(), vec!["s", "x"]);
        run.feed('b');
        assert_eq!(run.active_names(), vec!["s", "y"]);
        run.feed('b');
        assert_eq!(run.active_names(), vec!["s", "z"]);
        assert!(run.is_accepting());
    }

    #[test]
    fn out_of_alphabet_input_is_rejected_by_the_guard() {
        let nfa = single_step();
        assert!(!nfa.is_valid_input("ab"));
        assert!(!nfa.accepts("ab"));
        assert_eq!(
            nfa.try_accepts("ba"),
            Err(InvalidSymbol {
                symbol: 'b',
                position: 0
            })
        );
        assert_eq!(nfa.try_accepts("a"), Ok(true));
    }

    #[test]
    fn engine_treats_unknown_symbols_as_missing_transitions() {
        let nfa = single_step();
        assert!(!nfa.simulate("b"));
        assert!(!nfa.simulate("ab"));
    }

    #[test]
    fn verdicts_are_repeatable() {
        let nfa = ends_with_abb();
        let first: Vec<bool> = ["abb", "ab", "babb"].iter().map(|w| nfa.accepts(w)).collect();
        let second: Vec<bool> = ["abb", "ab", "babb"].iter().map(|w| nfa.accepts(w)).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![true, false, true]);
    }

    #[test]
    fn shared_across_threads() {
        let nfa = ends_with_abb();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    let nfa = &nfa;
                    scope.spawn(move || {
                        let word = format!("{}abb", "ba".repeat(i * 100));
                        nfa.accepts(&word)
                    })
                })
                .collect();
            for handle in handles {
                assert!(handle.join().unwrap());
            }
        });
    }
}
