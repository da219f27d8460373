use regular_automata::{AutomatonError, Dfa};

include!("macros.rs");

#[test]
fn test_new() {
    let dfa: Dfa<char> = Dfa::new();

    assert_eq!(1, dfa.total_states);
    assert_eq!(0, dfa.start_state);
    assert_eq!(0, dfa.accepting_states.len());
    assert_eq!(0, dfa.transition.iter().count());
}

#[test]
fn test_empty_language() {
    let dfa: Dfa<char> = Dfa::empty_language();

    assert_eq!(0, dfa.total_states);
    assert!(!dfa.evaluate("".chars()));
    assert!(!dfa.evaluate("a".chars()));
}

#[test]
fn test_empty_string() {
    let dfa: Dfa<char> = Dfa::empty_string();

    assert_eq!(1, dfa.total_states);
    assert!(dfa.evaluate("".chars()));
    assert!(!dfa.evaluate("a".chars()));
}

#[test]
fn test_single_symbol() {
    let dfa = Dfa::single_symbol('a');

    assert_eq!(2, dfa.total_states);
    assert_language!(dfa, ["a"], ["", "b", "aa", "ab"]);
}

#[test]
fn test_add_state() {
    let mut dfa: Dfa<char> = Dfa::new();
    let plain = dfa.add_state(false);
    assert_eq!(2, dfa.total_states);
    assert_eq!(1, plain);
    assert!(!dfa.is_accepting_state(plain));

    let accepting = dfa.add_state(true);
    assert_eq!(3, dfa.total_states);
    assert!(dfa.is_accepting_state(accepting));
}

#[test]
fn test_add_transition_out_of_range() {
    let mut dfa: Dfa<char> = Dfa::new();

    assert_eq!(
        Err(AutomatonError::StateOutOfRange { state: 3, total: 1 }),
        dfa.add_transition(0, 'a', 3)
    );
    assert_eq!(
        Err(AutomatonError::StateOutOfRange { state: 1, total: 1 }),
        dfa.set_accepting(1, true)
    );
}

#[test]
fn test_evaluate_ends_in_ab() {
    let dfa = ends_in_ab();

    assert!(dfa.evaluate("ab".chars()));
    assert!(dfa.evaluate("aab".chars()));
    assert!(!dfa.evaluate("ba".chars()));
    assert!(!dfa.evaluate("".chars()));
    assert_language!(dfa, ["ab", "bab", "ababab"], ["a", "b", "aba", "abb"]);
}

#[test]
fn test_evaluate_stops_on_missing_transition() {
    let dfa = Dfa::single_symbol('a');

    // 'b' has no transition from the start state, so evaluation halts and
    // rejects even though the remaining input could never matter.
    assert!(!dfa.evaluate("ba".chars()));
}

#[test]
fn test_alphabet() {
    let dfa = ends_in_ab();
    let alphabet = dfa.alphabet();

    assert_eq!(2, alphabet.len());
    assert!(alphabet.contains(&'a'));
    assert!(alphabet.contains(&'b'));
}

#[test]
fn test_totalize_adds_sink() {
    let dfa = Dfa::single_symbol('a');
    let total = dfa.totalize();

    // One sink state added; the accepting state's missing 'a' now routes to
    // it. The language is unchanged.
    assert_eq!(3, total.total_states);
    for s in strings_up_to(&['a'], 3) {
        assert_eq!(dfa.evaluate(s.chars()), total.evaluate(s.chars()));
    }
}

#[test]
fn test_totalize_total_automaton_unchanged() {
    // ends_in_ab defines every (state, symbol) pair over {a, b} already.
    let total = ends_in_ab().totalize();
    assert_eq!(3, total.total_states);
}

#[test]
fn test_totalize_with_explicit_alphabet() {
    let dfa: Dfa<char> = Dfa::empty_string();
    let total = dfa.totalize_with("ab".chars());

    assert_eq!(2, total.total_states);
    assert_language!(total, [""], ["a", "b", "ab"]);
}

#[test]
fn test_totalize_empty_language() {
    let dfa: Dfa<char> = Dfa::empty_language();
    let total = dfa.totalize_with("ab".chars());

    // The sink doubles as the start state; everything still rejects.
    assert_eq!(1, total.total_states);
    let accepted: [&str; 0] = [];
    assert_language!(total, accepted, ["", "a", "ab"]);
}

#[test]
fn test_prune_unreachable() {
    let mut dfa = Dfa::single_symbol('a');
    let orphan = dfa.add_state(true);
    dfa.add_transition(orphan, 'a', orphan).unwrap();

    let pruned = dfa.prune_unreachable();
    assert_eq!(2, pruned.total_states);
    assert_language!(pruned, ["a"], ["", "aa"]);
}
