use regular_automata::Dfa;

include!("macros.rs");

#[test]
fn test_concatenate_single_symbols() {
    let ab = Dfa::single_symbol('a').concatenate(&Dfa::single_symbol('b'));

    assert_language!(ab, ["ab"], ["", "a", "b", "ba", "abb", "aab"]);
}

#[test]
fn test_concatenate_splits_anywhere() {
    // a* . ab: the determinized automaton must consider every split point,
    // since a prefix of 'a's belongs to either side.
    let prefix = Dfa::single_symbol('a').kleene_star();
    let suffix = Dfa::single_symbol('a').concatenate(&Dfa::single_symbol('b'));
    let concat = prefix.concatenate(&suffix);

    assert_language!(concat, ["ab", "aab", "aaaab"], ["", "a", "b", "aba"]);
}

#[test]
fn test_concatenate_agrees_with_split_semantics() {
    let left = Dfa::single_symbol('a').kleene_star();
    let right = ends_in_ab();
    let concat = left.concatenate(&right);

    for s in strings_up_to(&['a', 'b'], 5) {
        let expected = (0..=s.len()).any(|split| {
            left.evaluate(s[..split].chars()) && right.evaluate(s[split..].chars())
        });
        assert_eq!(expected, concat.evaluate(s.chars()), r#"concatenation disagreed on "{}""#, s);
    }
}

#[test]
fn test_concatenate_must_pass_through_second() {
    // The first operand accepting alone is not enough.
    let concat = Dfa::single_symbol('a').concatenate(&Dfa::single_symbol('b'));
    assert!(!concat.evaluate("a".chars()));
}

#[test]
fn test_concatenate_empty_string_is_identity() {
    let machine = ends_in_ab();
    let padded = machine.concatenate(&Dfa::empty_string());

    for s in strings_up_to(&['a', 'b'], 4) {
        assert_eq!(machine.evaluate(s.chars()), padded.evaluate(s.chars()));
    }
}

#[test]
fn test_concatenate_empty_language_annihilates() {
    let nothing = ends_in_ab().concatenate(&Dfa::empty_language());

    assert_eq!(0, nothing.total_states);
}

#[test]
fn test_kleene_star_single_symbol() {
    let star = Dfa::single_symbol('a').kleene_star();

    assert!(star.evaluate("aaaa".chars()));
    assert!(!star.evaluate("aab".chars()));
    assert!(star.evaluate("".chars()));
}

#[test]
fn test_kleene_star_accepts_empty_always() {
    assert!(Dfa::single_symbol('a').kleene_star().evaluate("".chars()));
    assert!(Dfa::<char>::empty_language().kleene_star().evaluate("".chars()));
    assert!(Dfa::<char>::empty_string().kleene_star().evaluate("".chars()));
}

#[test]
fn test_kleene_star_of_word() {
    let ab = Dfa::single_symbol('a').concatenate(&Dfa::single_symbol('b'));
    let star = ab.kleene_star();

    assert_language!(star, ["", "ab", "abab", "ababab"], ["a", "aba", "abb", "ba"]);
}

#[test]
fn test_kleene_star_partitions_into_accepted_pieces() {
    let machine = ends_in_ab();
    let star = machine.kleene_star();

    // "abaab" = "ab" ++ "aab", both accepted by the base machine.
    assert_language!(star, ["", "ab", "abaab", "aabab"], ["a", "ba", "aba"]);
}
