#![deny(rust_2018_idioms)]
#![deny(future_incompatible)]

mod error;
mod minimize;

pub mod convert;
pub mod dfa;
pub mod lang;
pub mod nfa;
pub mod table;

pub use crate::convert::determinize;
pub use crate::dfa::Dfa;
pub use crate::error::AutomatonError;
pub use crate::lang::{Language, RegularLanguage};
pub use crate::nfa::Nfa;
