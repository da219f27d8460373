/// Error returned by the programmatic construction methods when a referenced
/// state does not exist. Evaluation and the closure operators never fail.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum AutomatonError {
    #[error("state {state} out of range: automaton has {total} states")]
    StateOutOfRange { state: usize, total: usize },
}
