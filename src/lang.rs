use crate::convert::determinize;
use crate::dfa::Dfa;
use crate::nfa::Nfa;

use std::hash::Hash;

/// The capability set shared by every regular-language backend: the base
/// constructors, membership evaluation, and the five closure operators.
///
/// Implemented by both [`Dfa`] and [`Nfa`], so callers composing languages
/// never need to know which representation backs a given one.
pub trait RegularLanguage: Sized {
    type Symbol;

    /// The backend recognizing the empty language (no sequences at all).
    fn empty_language() -> Self;

    /// The backend recognizing exactly the empty sequence.
    fn empty_string() -> Self;

    /// The backend recognizing exactly the one-symbol sequence `[symbol]`.
    fn single_symbol(symbol: Self::Symbol) -> Self;

    /// Determine whether the given symbol sequence is in the language.
    fn evaluate<I>(&self, input: I) -> bool
    where
        I: IntoIterator<Item = Self::Symbol>;

    fn intersection(&self, other: &Self) -> Self;

    fn union_or(&self, other: &Self) -> Self;

    fn concatenate(&self, other: &Self) -> Self;

    fn kleene_star(&self) -> Self;

    fn complement(&self) -> Self;
}

impl<T> RegularLanguage for Dfa<T>
where
    T: Clone + Eq + Hash,
{
    type Symbol = T;

    fn empty_language() -> Self {
        Dfa::empty_language()
    }

    fn empty_string() -> Self {
        Dfa::empty_string()
    }

    fn single_symbol(symbol: T) -> Self {
        Dfa::single_symbol(symbol)
    }

    fn evaluate<I>(&self, input: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        Dfa::evaluate(self, input)
    }

    fn intersection(&self, other: &Self) -> Self {
        Dfa::intersection(self, other)
    }

    fn union_or(&self, other: &Self) -> Self {
        Dfa::union_or(self, other)
    }

    fn concatenate(&self, other: &Self) -> Self {
        Dfa::concatenate(self, other)
    }

    fn kleene_star(&self) -> Self {
        Dfa::kleene_star(self)
    }

    fn complement(&self) -> Self {
        Dfa::complement(self)
    }
}

impl<T> RegularLanguage for Nfa<T>
where
    T: Clone + Eq + Hash,
{
    type Symbol = T;

    fn empty_language() -> Self {
        Nfa::empty_language()
    }

    fn empty_string() -> Self {
        Nfa::empty_string()
    }

    fn single_symbol(symbol: T) -> Self {
        Nfa::single_symbol(symbol)
    }

    fn evaluate<I>(&self, input: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        Nfa::evaluate(self, input)
    }

    /// Intersection has no natural epsilon construction, so both operands
    /// are determinized, intersected as DFAs, and the result embedded back.
    fn intersection(&self, other: &Self) -> Self {
        Nfa::from(&determinize(self).intersection(&determinize(other)))
    }

    fn union_or(&self, other: &Self) -> Self {
        Nfa::union(self, other)
    }

    fn concatenate(&self, other: &Self) -> Self {
        Nfa::concatenation(self, other)
    }

    fn kleene_star(&self) -> Self {
        Nfa::kleene_star(self)
    }

    /// Complement requires a total deterministic transition function, so the
    /// operand is determinized, complemented as a DFA, and embedded back.
    fn complement(&self) -> Self {
        Nfa::from(&determinize(self).complement())
    }
}

/// A regular language backed by some automaton representation.
///
/// Thin facade over any [`RegularLanguage`] backend; higher layers (a regex
/// compiler, say) compose and evaluate languages through this type without
/// depending on the concrete automaton behind each one.
#[derive(Clone, Debug)]
pub struct Language<A> {
    automaton: A,
}

impl<A> Language<A>
where
    A: RegularLanguage,
{
    /// Wrap an existing automaton.
    pub fn new(automaton: A) -> Self {
        Self { automaton }
    }

    /// The empty language.
    pub fn empty_language() -> Self {
        Self::new(A::empty_language())
    }

    /// The language containing only the empty sequence.
    pub fn empty_string() -> Self {
        Self::new(A::empty_string())
    }

    /// The language containing only the one-symbol sequence `[symbol]`.
    pub fn single_symbol(symbol: A::Symbol) -> Self {
        Self::new(A::single_symbol(symbol))
    }

    /// Determine whether the given symbol sequence is in the language.
    pub fn evaluate<I>(&self, input: I) -> bool
    where
        I: IntoIterator<Item = A::Symbol>,
    {
        self.automaton.evaluate(input)
    }

    pub fn intersection(&self, other: &Self) -> Self {
        Self::new(self.automaton.intersection(&other.automaton))
    }

    pub fn union_or(&self, other: &Self) -> Self {
        Self::new(self.automaton.union_or(&other.automaton))
    }

    pub fn concatenate(&self, other: &Self) -> Self {
        Self::new(self.automaton.concatenate(&other.automaton))
    }

    pub fn kleene_star(&self) -> Self {
        Self::new(self.automaton.kleene_star())
    }

    pub fn complement(&self) -> Self {
        Self::new(self.automaton.complement())
    }

    pub fn as_inner(&self) -> &A {
        &self.automaton
    }

    pub fn into_inner(self) -> A {
        self.automaton
    }
}

impl<T> Language<Dfa<T>>
where
    T: Clone + Eq + Hash,
{
    /// Shrink the backing DFA to the minimal language-equivalent one.
    /// Deterministic-backend languages only; the language is unchanged.
    pub fn minimize(&self) -> Self {
        Self::new(self.automaton.minimize())
    }

    /// Make the backing DFA's transition function total over its observed
    /// alphabet. The language is unchanged.
    pub fn totalize(&self) -> Self {
        Self::new(self.automaton.totalize())
    }
}

impl<A> From<A> for Language<A>
where
    A: RegularLanguage,
{
    fn from(automaton: A) -> Self {
        Self::new(automaton)
    }
}
