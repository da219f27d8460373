use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

/// A two-key lookup table used to store transition functions. Rows are state
/// indices, columns are transition labels.
#[derive(Clone, Debug)]
pub struct Table<R, C, V>
where
    R: Eq + Hash,
    C: Eq + Hash,
{
    rows: HashMap<R, HashMap<C, V>>,
}

impl<R, C, V> Table<R, C, V>
where
    R: Eq + Hash,
    C: Eq + Hash,
{
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    /// Set the value for the given keys, returning the previous value if one
    /// was present.
    pub fn set(&mut self, row: R, col: C, val: V) -> Option<V> {
        self.rows
            .entry(row)
            .or_insert_with(HashMap::new)
            .insert(col, val)
    }

    /// Set the value for the given keys, or if a value already exists there,
    /// pass it to the given callback instead.
    pub fn set_or<F>(&mut self, row: R, col: C, val: V, or: F)
    where
        F: FnOnce(&mut V),
    {
        match self.rows.entry(row).or_insert_with(HashMap::new).entry(col) {
            Entry::Occupied(mut entry) => or(entry.get_mut()),
            Entry::Vacant(entry) => {
                entry.insert(val);
            }
        }
    }

    /// Retrieve the value for the given keys.
    pub fn get(&self, row: &R, col: &C) -> Option<&V> {
        self.rows.get(row).and_then(|cols| cols.get(col))
    }

    /// Retrieve a full row, if it has any entries.
    pub fn get_row(&self, row: &R) -> Option<&HashMap<C, V>> {
        self.rows.get(row)
    }

    /// Iterate over every entry in the table.
    pub fn iter(&self) -> impl Iterator<Item = (&R, &C, &V)> + '_ {
        self.rows
            .iter()
            .flat_map(|(row, cols)| cols.iter().map(move |(col, val)| (row, col, val)))
    }
}

impl<R, C, V> Default for Table<R, C, V>
where
    R: Eq + Hash,
    C: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
