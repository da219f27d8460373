use crate::convert;
use crate::error::AutomatonError;
use crate::nfa::Nfa;
use crate::table::Table;

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// A deterministic finite automaton, or DFA, over symbol type `T`.
///
/// States are dense integer indices `0..total_states`. The transition
/// function is partial: a missing (state, symbol) entry means the automaton
/// halts and rejects, so a reject sink never needs to be materialized. The
/// closure operators below always build a fresh automaton and never mutate
/// their operands.
#[derive(Clone, Debug)]
pub struct Dfa<T>
where
    T: Clone + Eq + Hash,
{
    /// The start state. Meaningful only when `total_states > 0`; the
    /// zero-state automaton has no start state and rejects every input.
    pub start_state: usize,
    /// The number of total states in the DFA. There is a state labeled i for
    /// every i where 0 <= i < total_states.
    pub total_states: usize,
    /// The set of accepting states.
    pub accepting_states: HashSet<usize>,
    /// A lookup table for transitions between states.
    pub transition: Table<usize, T, usize>,
}

impl<T> Dfa<T>
where
    T: Clone + Eq + Hash,
{
    /// Create a new DFA with a single, non-accepting start state.
    pub fn new() -> Self {
        Self {
            start_state: 0,
            total_states: 1,
            accepting_states: HashSet::new(),
            transition: Table::new(),
        }
    }

    /// The automaton recognizing the empty language: no states, no start
    /// state, rejects everything, the empty sequence included.
    pub fn empty_language() -> Self {
        Self {
            start_state: 0,
            total_states: 0,
            accepting_states: HashSet::new(),
            transition: Table::new(),
        }
    }

    /// The automaton recognizing exactly the empty sequence: one accepting
    /// state and no transitions. Distinct from [`Dfa::empty_language`].
    pub fn empty_string() -> Self {
        let mut dfa = Self::new();
        dfa.accepting_states.insert(dfa.start_state);
        dfa
    }

    /// The automaton recognizing exactly the one-symbol sequence `[symbol]`.
    pub fn single_symbol(symbol: T) -> Self {
        let mut dfa = Self::new();
        let accepting = dfa.add_state(true);
        dfa.transition.set(dfa.start_state, symbol, accepting);
        dfa
    }

    /// Add a state to the DFA and return its label. The total number of
    /// states is always greater than the label of the newest state by 1.
    pub fn add_state(&mut self, accepting: bool) -> usize {
        let label = self.total_states;
        self.total_states += 1;
        if accepting {
            self.accepting_states.insert(label);
        }
        label
    }

    /// Add a transition between two existing states.
    pub fn add_transition(&mut self, from: usize, symbol: T, to: usize) -> Result<(), AutomatonError> {
        self.check_state(from)?;
        self.check_state(to)?;
        self.transition.set(from, symbol, to);
        Ok(())
    }

    /// Mark or unmark an existing state as accepting.
    pub fn set_accepting(&mut self, state: usize, accepting: bool) -> Result<(), AutomatonError> {
        self.check_state(state)?;
        if accepting {
            self.accepting_states.insert(state);
        } else {
            self.accepting_states.remove(&state);
        }
        Ok(())
    }

    fn check_state(&self, state: usize) -> Result<(), AutomatonError> {
        if state < self.total_states {
            Ok(())
        } else {
            Err(AutomatonError::StateOutOfRange {
                state,
                total: self.total_states,
            })
        }
    }

    /// Whether the given state is accepting.
    pub fn is_accepting_state(&self, state: usize) -> bool {
        self.accepting_states.contains(&state)
    }

    /// The set of symbols appearing anywhere in the transition table. This is
    /// the default alphabet used by [`Dfa::totalize`].
    pub fn alphabet(&self) -> HashSet<T> {
        self.transition
            .iter()
            .map(|(_, symbol, _)| symbol.clone())
            .collect()
    }

    /// Determine whether the given symbol sequence is accepted.
    ///
    /// Walks one transition per symbol from the start state; a missing
    /// transition rejects immediately. Acceptance requires the whole input to
    /// be consumed with the walk ending in an accepting state.
    pub fn evaluate<I>(&self, input: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        if self.total_states == 0 {
            return false;
        }

        let mut current = self.start_state;
        for symbol in input {
            match self.transition.get(&current, &symbol) {
                Some(&next) => current = next,
                None => return false,
            }
        }
        self.accepting_states.contains(&current)
    }
}

impl<T> Default for Dfa<T>
where
    T: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Dfa<T>
where
    T: Clone + Eq + Hash,
{
    /// Make the transition function total over the observed alphabet by
    /// routing every missing (state, symbol) pair to a fresh non-accepting
    /// sink state. See [`Dfa::totalize_with`].
    pub fn totalize(&self) -> Dfa<T> {
        self.totalize_with(self.alphabet())
    }

    /// Make the transition function total over the given alphabet. The sink
    /// state loops to itself on every symbol, so once entered it can never be
    /// left; flipping its accept bit is what makes [`Dfa::complement`]
    /// correct. An automaton that is already total is returned unchanged,
    /// without a spurious sink.
    pub fn totalize_with<I>(&self, alphabet: I) -> Dfa<T>
    where
        I: IntoIterator<Item = T>,
    {
        let alphabet: HashSet<T> = alphabet.into_iter().collect();

        if self.total_states == 0 {
            // No states at all: the sink doubles as the start state. The
            // language stays empty.
            let mut total = Dfa::new();
            for symbol in alphabet {
                total.transition.set(total.start_state, symbol, total.start_state);
            }
            return total;
        }

        let mut missing = Vec::new();
        for state in 0..self.total_states {
            for symbol in &alphabet {
                if self.transition.get(&state, symbol).is_none() {
                    missing.push((state, symbol.clone()));
                }
            }
        }
        if missing.is_empty() {
            return self.clone();
        }

        let mut total = self.clone();
        let sink = total.add_state(false);
        for symbol in alphabet {
            total.transition.set(sink, symbol, sink);
        }
        for (state, symbol) in missing {
            total.transition.set(state, symbol, sink);
        }
        total
    }

    /// The automaton recognizing the complement of this automaton's language
    /// over its observed alphabet.
    ///
    /// The operand is totalized first: flipping accept bits on a partial
    /// automaton would leave its missing transitions behaving as implicit
    /// rejects and silently compute the wrong language.
    pub fn complement(&self) -> Dfa<T> {
        let mut complement = self.totalize();
        let flipped = (0..complement.total_states)
            .filter(|state| !complement.accepting_states.contains(state))
            .collect();
        complement.accepting_states = flipped;
        complement
    }

    /// The automaton recognizing the intersection of the two operand
    /// languages, built by the cross-product construction.
    ///
    /// A product transition exists only where both operands define one.
    /// Because missing transitions already mean reject, no totalization is
    /// needed: if either side would halt, the pair state halts.
    pub fn intersection(&self, other: &Dfa<T>) -> Dfa<T> {
        cross_product(self, other, |a, b| a && b).prune_unreachable()
    }

    /// The automaton recognizing the union of the two operand languages.
    ///
    /// Unlike intersection, the raw product is wrong here: a symbol defined
    /// on only one side must let that side keep matching, with the other side
    /// parked in a permanent non-accepting sink rather than halting the pair.
    /// Both operands are therefore totalized over their combined alphabet
    /// before the product is taken.
    pub fn union_or(&self, other: &Dfa<T>) -> Dfa<T> {
        let mut alphabet = self.alphabet();
        alphabet.extend(other.alphabet());

        let left = self.totalize_with(alphabet.iter().cloned());
        let right = other.totalize_with(alphabet);
        cross_product(&left, &right, |a, b| a || b).prune_unreachable()
    }

    /// The automaton recognizing the concatenation of the two operand
    /// languages: every accepted sequence splits into a prefix accepted by
    /// `self` followed by a suffix accepted by `other`.
    ///
    /// Built by linking the operands into an epsilon-NFA and determinizing.
    pub fn concatenate(&self, other: &Dfa<T>) -> Dfa<T> {
        if self.total_states == 0 || other.total_states == 0 {
            return Dfa::empty_language();
        }
        convert::determinize(&Nfa::concatenation(&Nfa::from(self), &Nfa::from(other)))
    }

    /// The automaton recognizing the Kleene star of this automaton's
    /// language: zero or more accepted sequences in a row. Always accepts the
    /// empty sequence.
    pub fn kleene_star(&self) -> Dfa<T> {
        if self.total_states == 0 {
            return Dfa::empty_string();
        }
        convert::determinize(&Nfa::kleene_star(&Nfa::from(self)))
    }

    /// Drop every state unreachable from the start state, relabeling the
    /// survivors densely. The product constructions call this before
    /// returning so dead pair states don't inflate later operations.
    pub fn prune_unreachable(&self) -> Dfa<T> {
        if self.total_states == 0 {
            return self.clone();
        }

        let mut remap: Vec<Option<usize>> = vec![None; self.total_states];
        let mut next_label = 0;
        let mut queue = VecDeque::new();

        remap[self.start_state] = Some(next_label);
        next_label += 1;
        queue.push_back(self.start_state);

        while let Some(state) = queue.pop_front() {
            if let Some(row) = self.transition.get_row(&state) {
                for &to in row.values() {
                    if remap[to].is_none() {
                        remap[to] = Some(next_label);
                        next_label += 1;
                        queue.push_back(to);
                    }
                }
            }
        }

        let mut pruned = Dfa {
            start_state: 0,
            total_states: next_label,
            accepting_states: HashSet::new(),
            transition: Table::new(),
        };
        for state in 0..self.total_states {
            let from = match remap[state] {
                Some(label) => label,
                None => continue,
            };
            if self.accepting_states.contains(&state) {
                pruned.accepting_states.insert(from);
            }
            if let Some(row) = self.transition.get_row(&state) {
                for (symbol, &to) in row {
                    if let Some(to) = remap[to] {
                        pruned.transition.set(from, symbol.clone(), to);
                    }
                }
            }
        }
        pruned
    }
}

/// Shared machinery for intersection and union: the product automaton over
/// state pairs, flattened as `index(i, j) = i * S2 + j`, with the accept set
/// decided per pair by the given combiner.
fn cross_product<T, F>(first: &Dfa<T>, second: &Dfa<T>, accepting: F) -> Dfa<T>
where
    T: Clone + Eq + Hash,
    F: Fn(bool, bool) -> bool,
{
    let s2 = second.total_states;
    let pair_index = |i: usize, j: usize| i * s2 + j;

    let mut product = Dfa {
        start_state: 0,
        total_states: first.total_states * s2,
        accepting_states: HashSet::new(),
        transition: Table::new(),
    };
    if product.total_states == 0 {
        return product;
    }
    product.start_state = pair_index(first.start_state, second.start_state);

    for i in 0..first.total_states {
        for j in 0..second.total_states {
            if accepting(
                first.accepting_states.contains(&i),
                second.accepting_states.contains(&j),
            ) {
                product.accepting_states.insert(pair_index(i, j));
            }

            // A pair transition exists only on symbols both sides define.
            let rows = (first.transition.get_row(&i), second.transition.get_row(&j));
            if let (Some(row_a), Some(row_b)) = rows {
                for (symbol, &to_a) in row_a {
                    if let Some(&to_b) = row_b.get(symbol) {
                        product
                            .transition
                            .set(pair_index(i, j), symbol.clone(), pair_index(to_a, to_b));
                    }
                }
            }
        }
    }
    product
}
