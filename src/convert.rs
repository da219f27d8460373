use crate::dfa::Dfa;
use crate::nfa::{Nfa, Transition};

use im::OrdSet;
use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// Convert an NFA into a language-equivalent DFA by the subset construction.
///
/// Each DFA state stands for the epsilon closure of a set of NFA states; the
/// worklist explores one symbol at a time from each discovered set, so only
/// reachable set states are ever materialized. A set state accepts iff it
/// contains an accepting NFA state. Shared by concatenation and Kleene star,
/// and by the NFA backend's intersection and complement paths.
pub fn determinize<T>(nfa: &Nfa<T>) -> Dfa<T>
where
    T: Clone + Eq + Hash,
{
    if nfa.total_states == 0 {
        return Dfa::empty_language();
    }

    let mut dfa = Dfa::new();
    let mut labels: HashMap<OrdSet<usize>, usize> = HashMap::new();
    let mut worklist: VecDeque<(OrdSet<usize>, usize)> = VecDeque::new();

    let initial: OrdSet<usize> = nfa.epsilon_closure(nfa.start_state).into_iter().collect();
    if initial.iter().any(|&state| nfa.is_accepting_state(state)) {
        dfa.accepting_states.insert(dfa.start_state);
    }
    labels.insert(initial.clone(), dfa.start_state);
    worklist.push_back((initial, dfa.start_state));

    while let Some((current, from)) = worklist.pop_front() {
        let members: HashSet<usize> = current.iter().cloned().collect();

        // Every symbol on which some member state can move.
        let mut symbols: HashSet<T> = HashSet::new();
        for state in &members {
            if let Some(row) = nfa.transition.get_row(state) {
                for label in row.keys() {
                    if let Transition::Symbol(symbol) = label {
                        symbols.insert(symbol.clone());
                    }
                }
            }
        }

        for symbol in symbols {
            let moved = nfa.move_set(&members, &symbol);
            if moved.is_empty() {
                continue;
            }
            let closure: OrdSet<usize> = nfa.epsilon_closure_set(&moved).into_iter().collect();

            let to = match labels.get(&closure) {
                Some(&label) => label,
                None => {
                    let accepting = closure.iter().any(|&state| nfa.is_accepting_state(state));
                    let label = dfa.add_state(accepting);
                    labels.insert(closure.clone(), label);
                    worklist.push_back((closure, label));
                    label
                }
            };
            dfa.transition.set(from, symbol, to);
        }
    }

    dfa
}

impl<T> From<Nfa<T>> for Dfa<T>
where
    T: Clone + Eq + Hash,
{
    fn from(nfa: Nfa<T>) -> Self {
        determinize(&nfa)
    }
}

impl<T> From<&Nfa<T>> for Dfa<T>
where
    T: Clone + Eq + Hash,
{
    fn from(nfa: &Nfa<T>) -> Self {
        determinize(nfa)
    }
}
