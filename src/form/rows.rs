//! Position-addressed row lists backing the ingredient and instruction editors.
//!
//! A [`RowList`] always holds at least one row. Rows are addressed by their
//! rendered position; each row additionally carries a [`RowId`] handed out
//! from a per-list counter so the UI can keep focus on the same row while
//! positions shift underneath it.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Synthetic identifier assigned to a row when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

/// A single row together with its id.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<T> {
    /// Stable identity of the row
    pub id: RowId,
    /// Row contents
    pub value: T,
}

/// Ordered list of rows that can never become empty.
///
/// `T::default()` is the empty-row factory.
#[derive(Debug, Clone, PartialEq)]
pub struct RowList<T> {
    rows: Vec<Row<T>>,
    next_id: u64,
}

impl<T: Default> RowList<T> {
    /// Creates a list holding one empty row.
    pub fn new() -> Self {
        Self::from_values(Vec::new())
    }

    /// Creates a list from existing values, numbering them in order.
    ///
    /// An empty input yields a single empty row.
    pub fn from_values(values: Vec<T>) -> Self {
        let mut list = Self {
            rows: Vec::with_capacity(values.len().max(1)),
            next_id: 0,
        };
        for value in values {
            list.push(value);
        }
        if list.rows.is_empty() {
            list.push(T::default());
        }
        list
    }

    /// Appends a new empty row and returns its id.
    pub fn add_row(&mut self) -> RowId {
        self.push(T::default())
    }
}

impl<T> RowList<T> {
    fn push(&mut self, value: T) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(Row { id, value });
        id
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false` for a list built through the public constructors.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.rows.get(index).map(|row| &row.value)
    }

    /// Id of the row at `index`.
    pub fn id_at(&self, index: usize) -> Option<RowId> {
        self.rows.get(index).map(|row| row.id)
    }

    /// Current position of the row with the given id.
    pub fn position_of(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    /// Rows with their ids.
    pub fn rows(&self) -> &[Row<T>] {
        &self.rows
    }

    /// Iterates over row values in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().map(|row| &row.value)
    }

    /// Replaces the value at `index` with the one produced from the old value.
    ///
    /// Returns `false` and leaves the list untouched when `index` is out of bounds.
    pub fn update_at(&mut self, index: usize, update: impl FnOnce(&T) -> T) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.value = update(&row.value);
                true
            }
            None => false,
        }
    }

    /// Removes the row at `index` unless it is the only row left.
    ///
    /// Returns whether a row was removed.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if self.rows.len() <= 1 || index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        true
    }
}

impl<T: Default> Default for RowList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize> Serialize for RowList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de> + Default> Deserialize<'de> for RowList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from_values)
    }
}
