use crate::dfa::Dfa;
use crate::table::Table;

use im::OrdSet;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

impl<T> Dfa<T>
where
    T: Clone + Eq + Hash,
{
    /// Produce the automaton with the fewest states recognizing the same
    /// language, by Myhill-Nerode partition refinement.
    ///
    /// Unreachable states are pruned first. The partition starts as
    /// {accepting, non-accepting} and is refined until no block splits: two
    /// states stay together only if, for every symbol, their transitions land
    /// in the same block. States missing a transition on a symbol form their
    /// own sub-group on that symbol, distinct from every defined target
    /// block, matching the implicit-reject evaluation rule. The result is the
    /// quotient automaton over the final blocks.
    pub fn minimize(&self) -> Dfa<T> {
        let pruned = self.prune_unreachable();
        if pruned.total_states == 0 {
            return pruned;
        }

        let alphabet: Vec<T> = pruned.alphabet().into_iter().collect();

        let accepting: OrdSet<usize> = pruned.accepting_states.iter().cloned().collect();
        let rejecting: OrdSet<usize> = (0..pruned.total_states)
            .filter(|state| !pruned.accepting_states.contains(state))
            .collect();
        let mut blocks: Vec<OrdSet<usize>> = Vec::new();
        if !accepting.is_empty() {
            blocks.push(accepting);
        }
        if !rejecting.is_empty() {
            blocks.push(rejecting);
        }

        // Refine to fixpoint. Each pass either splits some block or leaves
        // the partition untouched; block count is bounded by the state count,
        // so this terminates.
        loop {
            let block_of = block_index(&blocks, pruned.total_states);
            let mut refined = Vec::new();
            let mut split = false;
            for block in &blocks {
                let pieces = split_block(&pruned, block, &alphabet, &block_of);
                if pieces.len() > 1 {
                    split = true;
                }
                refined.extend(pieces);
            }
            blocks = refined;
            if !split {
                break;
            }
        }

        quotient(&pruned, &blocks)
    }
}

/// Map each state to the label of the block containing it.
fn block_index(blocks: &[OrdSet<usize>], total_states: usize) -> Vec<usize> {
    let mut block_of = vec![0; total_states];
    for (label, block) in blocks.iter().enumerate() {
        for &state in block {
            block_of[state] = label;
        }
    }
    block_of
}

/// Split one block by transition behavior: states stay together only if they
/// agree, per symbol, on the target block (or on having no transition).
fn split_block<T>(
    dfa: &Dfa<T>,
    block: &OrdSet<usize>,
    alphabet: &[T],
    block_of: &[usize],
) -> Vec<OrdSet<usize>>
where
    T: Clone + Eq + Hash,
{
    let mut groups: HashMap<Vec<Option<usize>>, OrdSet<usize>> = HashMap::new();
    for &state in block {
        let signature: Vec<Option<usize>> = alphabet
            .iter()
            .map(|symbol| dfa.transition.get(&state, symbol).map(|&to| block_of[to]))
            .collect();
        groups.entry(signature).or_insert_with(OrdSet::new).insert(state);
    }
    groups.into_iter().map(|(_, group)| group).collect()
}

/// Build the quotient automaton: one state per block, with transitions read
/// off any representative member. Refinement guarantees all members agree.
fn quotient<T>(dfa: &Dfa<T>, blocks: &[OrdSet<usize>]) -> Dfa<T>
where
    T: Clone + Eq + Hash,
{
    let block_of = block_index(blocks, dfa.total_states);

    let mut minimized = Dfa {
        start_state: block_of[dfa.start_state],
        total_states: blocks.len(),
        accepting_states: HashSet::new(),
        transition: Table::new(),
    };
    for (label, block) in blocks.iter().enumerate() {
        let representative = match block.iter().next() {
            Some(&state) => state,
            None => continue,
        };
        if dfa.accepting_states.contains(&representative) {
            minimized.accepting_states.insert(label);
        }
        if let Some(row) = dfa.transition.get_row(&representative) {
            for (symbol, &to) in row {
                minimized.transition.set(label, symbol.clone(), block_of[to]);
            }
        }
    }
    minimized
}
