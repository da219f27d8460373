use crate::dfa::Dfa;
use crate::error::AutomatonError;
use crate::table::Table;

use std::collections::HashSet;
use std::hash::Hash;

/// A non-deterministic finite automaton with epsilon transitions, over symbol
/// type `T`.
///
/// Uses the same dense state-index arena as [`Dfa`], but (state, label) maps
/// to a *set* of successor states and states may additionally be linked by
/// epsilon (symbol-free) moves. Concatenation and Kleene star build one of
/// these transiently and hand it straight to [`crate::determinize`]; it is
/// also usable directly as a facade backend, evaluated by set simulation.
#[derive(Clone, Debug)]
pub struct Nfa<T>
where
    T: Clone + Eq + Hash,
{
    /// The start state. Meaningful only when `total_states > 0`.
    pub start_state: usize,
    /// The number of total states in the NFA. There is a state labeled i for
    /// every i where 0 <= i < total_states.
    pub total_states: usize,
    /// The set of accepting states.
    pub accepting_states: HashSet<usize>,
    /// A lookup table for transitions between states.
    pub transition: Table<usize, Transition<T>, HashSet<usize>>,
}

/// A transition label between states in an NFA.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Transition<T>
where
    T: Clone + Eq + Hash,
{
    /// A transition on an input symbol.
    Symbol(T),
    /// An epsilon transition: the NFA may change state spontaneously without
    /// consuming an input symbol.
    Epsilon,
}

impl<T> Nfa<T>
where
    T: Clone + Eq + Hash,
{
    /// Create a new NFA with a single, non-accepting start state.
    pub fn new() -> Self {
        Self {
            start_state: 0,
            total_states: 1,
            accepting_states: HashSet::new(),
            transition: Table::new(),
        }
    }

    /// The NFA recognizing the empty language: no states at all.
    pub fn empty_language() -> Self {
        Self {
            start_state: 0,
            total_states: 0,
            accepting_states: HashSet::new(),
            transition: Table::new(),
        }
    }

    /// The NFA recognizing exactly the empty sequence.
    pub fn empty_string() -> Self {
        let mut nfa = Self::new();
        nfa.accepting_states.insert(nfa.start_state);
        nfa
    }

    /// The NFA recognizing exactly the one-symbol sequence `[symbol]`.
    pub fn single_symbol(symbol: T) -> Self {
        let mut nfa = Self::new();
        let accepting = nfa.add_state(true);
        nfa.connect(nfa.start_state, Transition::Symbol(symbol), accepting);
        nfa
    }

    /// Add a state to the NFA and return its label. The total number of
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
    pub fn add_transition(
        &mut self,
        from: usize,
        label: Transition<T>,
        to: usize,
    ) -> Result<(), AutomatonError> {
        self.check_state(from)?;
        self.check_state(to)?;
        self.connect(from, label, to);
        Ok(())
    }

    /// Add a transition on an input symbol. See [`Nfa::add_transition`].
    pub fn add_symbol_transition(
        &mut self,
        from: usize,
        symbol: T,
        to: usize,
    ) -> Result<(), AutomatonError> {
        self.add_transition(from, Transition::Symbol(symbol), to)
    }

    /// Add an epsilon transition. See [`Nfa::add_transition`].
    pub fn add_epsilon_transition(&mut self, from: usize, to: usize) -> Result<(), AutomatonError> {
        self.add_transition(from, Transition::Epsilon, to)
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

    /// Unchecked insert for construction code that owns its index arithmetic.
    fn connect(&mut self, from: usize, label: Transition<T>, to: usize) {
        let mut targets = HashSet::new();
        targets.insert(to);
        self.transition.set_or(from, label, targets, |existing| {
            existing.insert(to);
        });
    }

    /// Copy another NFA's states and transitions into this one, returning the
    /// label offset of the copy. Start and accepting markers of the source
    /// are not carried over; state i of the source becomes i + offset here.
    fn copy_into(&mut self, src: &Nfa<T>) -> usize {
        let offset = self.total_states;
        self.total_states += src.total_states;
        for (&from, label, targets) in src.transition.iter() {
            for &to in targets {
                self.connect(from + offset, label.clone(), to + offset);
            }
        }
        offset
    }

    /// Whether the given state is accepting.
    pub fn is_accepting_state(&self, state: usize) -> bool {
        self.accepting_states.contains(&state)
    }

    /// The set of all states reachable from the given state on epsilon
    /// transitions only, the state itself included. Iterative, since star
    /// constructions introduce epsilon cycles.
    pub fn epsilon_closure(&self, state: usize) -> HashSet<usize> {
        let mut closure = HashSet::new();
        let mut pending = vec![state];
        while let Some(state) = pending.pop() {
            if !closure.insert(state) {
                continue;
            }
            if let Some(row) = self.transition.get_row(&state) {
                if let Some(targets) = row.get(&Transition::Epsilon) {
                    pending.extend(targets.iter().cloned());
                }
            }
        }
        closure
    }

    /// The union of epsilon closures of every state in the given set.
    pub fn epsilon_closure_set(&self, states: &HashSet<usize>) -> HashSet<usize> {
        let mut closure = HashSet::new();
        for &state in states {
            closure.extend(self.epsilon_closure(state));
        }
        closure
    }

    /// The set of states reachable from the given set by consuming exactly
    /// the given symbol (no closure applied afterwards).
    pub fn move_set(&self, states: &HashSet<usize>, symbol: &T) -> HashSet<usize> {
        let label = Transition::Symbol(symbol.clone());
        let mut moved = HashSet::new();
        for state in states {
            if let Some(row) = self.transition.get_row(state) {
                if let Some(targets) = row.get(&label) {
                    moved.extend(targets.iter().cloned());
                }
            }
        }
        moved
    }

    /// Determine whether the given symbol sequence is accepted, by direct
    /// set simulation: closure, move, closure.
    pub fn evaluate<I>(&self, input: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        if self.total_states == 0 {
            return false;
        }

        let mut current = self.epsilon_closure(self.start_state);
        for symbol in input {
            let moved = self.move_set(&current, &symbol);
            current = self.epsilon_closure_set(&moved);
            if current.is_empty() {
                return false;
            }
        }
        current.iter().any(|&state| self.is_accepting_state(state))
    }
}

impl<T> Nfa<T>
where
    T: Clone + Eq + Hash,
{
    /// The NFA recognizing the union of the two operand languages: a fresh
    /// start state with epsilon transitions into each operand, and a fresh
    /// accepting state with epsilon transitions in from each operand's
    /// accepting states.
    pub fn union(first: &Nfa<T>, second: &Nfa<T>) -> Nfa<T> {
        let mut union = Nfa::new();
        let accepting = union.add_state(true);

        for operand in &[first, second] {
            if operand.total_states == 0 {
                continue;
            }
            let offset = union.copy_into(operand);
            union.connect(union.start_state, Transition::Epsilon, operand.start_state + offset);
            for &state in &operand.accepting_states {
                union.connect(state + offset, Transition::Epsilon, accepting);
            }
        }
        union
    }

    /// The NFA recognizing the concatenation of the two operand languages.
    /// The first operand's start state starts the result; every accepting
    /// state of the first gains an epsilon transition to the second's start;
    /// only the second operand's accepting states accept, so matching must
    /// pass through the second operand.
    pub fn concatenation(first: &Nfa<T>, second: &Nfa<T>) -> Nfa<T> {
        if first.total_states == 0 || second.total_states == 0 {
            return Nfa::empty_language();
        }

        let mut concat = first.clone();
        let offset = concat.copy_into(second);
        for &state in &first.accepting_states {
            concat.connect(state, Transition::Epsilon, second.start_state + offset);
        }
        concat.accepting_states = second
            .accepting_states
            .iter()
            .map(|&state| state + offset)
            .collect();
        concat
    }

    /// The NFA recognizing the Kleene star of the operand language. A fresh
    /// state is both start and accepting (admitting the empty sequence), with
    /// an epsilon transition to the operand's start; every accepting state of
    /// the operand stays accepting and loops back to the operand's start.
    pub fn kleene_star(inner: &Nfa<T>) -> Nfa<T> {
        if inner.total_states == 0 {
            return Nfa::empty_string();
        }

        let mut star = Nfa::new();
        star.accepting_states.insert(star.start_state);
        let offset = star.copy_into(inner);
        star.connect(star.start_state, Transition::Epsilon, inner.start_state + offset);
        for &state in &inner.accepting_states {
            star.accepting_states.insert(state + offset);
            star.connect(state + offset, Transition::Epsilon, inner.start_state + offset);
        }
        star
    }
}

impl<T> Default for Nfa<T>
where
    T: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<&Dfa<T>> for Nfa<T>
where
    T: Clone + Eq + Hash,
{
    /// Embed a DFA as an NFA without epsilon transitions. Every DFA is
    /// already a degenerate NFA, so this is a straight relabeling.
    fn from(dfa: &Dfa<T>) -> Self {
        let mut nfa = Nfa {
            start_state: dfa.start_state,
            total_states: dfa.total_states,
            accepting_states: dfa.accepting_states.clone(),
            transition: Table::new(),
        };
        for (&from, symbol, &to) in dfa.transition.iter() {
            nfa.connect(from, Transition::Symbol(symbol.clone()), to);
        }
        nfa
    }
}
