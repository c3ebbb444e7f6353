//! The finished generalized Büchi automaton and the write-only builder used to
//! assemble it (spec.md §4.6).

/// A generalized Büchi automaton: `N` states, an initial subset, a family of accepting
/// sets (one per temporal subformula of `All`), and a transition relation.
///
/// Every set returned by the query methods below is sorted ascending and
/// duplicate-free — guaranteed once by [`AutomatonBuilder::finalize`], never by the
/// caller.
#[derive(Clone, Debug)]
pub struct Automaton {
    state_count: usize,
    initial: Vec<usize>,
    accepting: Vec<Vec<usize>>,
    transitions: Vec<Vec<usize>>,
}

impl Automaton {
    pub fn state_count(&self) -> usize {
        self.state_count
    }

    pub fn initial(&self) -> &[usize] {
        &self.initial
    }

    pub fn accepting_set_count(&self) -> usize {
        self.accepting.len()
    }

    pub fn accepting(&self, set_index: usize) -> &[usize] {
        &self.accepting[set_index]
    }

    pub fn transitions(&self, state: usize) -> &[usize] {
        &self.transitions[state]
    }
}

/// Write-only builder for an [`Automaton`] of a fixed, known state and accepting-set
/// count. Mirrors the source `Automaton` class's `add_transition`/`mark_init`/
/// `mark_accept`/`finalize` API one for one.
pub struct AutomatonBuilder {
    state_count: usize,
    initial: Vec<usize>,
    accepting: Vec<Vec<usize>>,
    transitions: Vec<Vec<usize>>,
}

impl AutomatonBuilder {
    pub fn new(state_count: usize, accepting_set_count: usize) -> AutomatonBuilder {
        AutomatonBuilder {
            state_count,
            initial: Vec::new(),
            accepting: vec![Vec::new(); accepting_set_count],
            transitions: vec![Vec::new(); state_count],
        }
    }

    pub fn add_transition(&mut self, src: usize, dst: usize) {
        self.transitions[src].push(dst);
    }

    pub fn mark_initial(&mut self, state: usize) {
        assert!(state < self.state_count, "invalid state number");
        self.initial.push(state);
    }

    pub fn mark_accepting(&mut self, set_index: usize, state: usize) {
        assert!(state < self.state_count, "invalid state number");
        self.accepting[set_index].push(state);
    }

    /// Sort and uniquify the initial set, every accepting set, and every adjacency
    /// list, then freeze the result into an [`Automaton`].
    pub fn finalize(mut self) -> Automaton {
        dedup(&mut self.initial);
        for set in &mut self.accepting {
            dedup(set);
        }
        for adjacency in &mut self.transitions {
            dedup(adjacency);
        }

        Automaton {
            state_count: self.state_count,
            initial: self.initial,
            accepting: self.accepting,
            transitions: self.transitions,
        }
    }
}

fn dedup(values: &mut Vec<usize>) {
    values.sort_unstable();
    values.dedup();
}
