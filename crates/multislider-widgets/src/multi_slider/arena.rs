//! Fixed-length per-thumb storage addressed by validated indices.

use std::ops::{Index, IndexMut};

/// Index of a thumb, handed out by a slider or arena that validated it.
///
/// The thumb count of a slider never changes, so an index obtained from one
/// slider stays valid for every per-thumb container of that slider. Checked
/// accessors return `None` for an index taken from a larger slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThumbIndex(usize);

impl ThumbIndex {
    /// The first thumb; every slider has at least one.
    pub const FIRST: Self = Self(0);

    #[must_use]
    pub(crate) const fn new(index: usize, count: usize) -> Option<Self> {
        if index < count {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Raw position of the thumb.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Thumb immediately before this one.
    #[must_use]
    pub const fn prev(self) -> Option<Self> {
        match self.0 {
            0 => None,
            i => Some(Self(i - 1)),
        }
    }

    /// Thumb immediately after this one, if `count` has room for it.
    #[must_use]
    pub(crate) const fn next(self, count: usize) -> Option<Self> {
        Self::new(self.0 + 1, count)
    }
}

impl std::fmt::Display for ThumbIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owned container with exactly one slot per thumb.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbArena<T> {
    slots: Box<[T]>,
}

impl<T> ThumbArena<T> {
    /// Build an arena of `count` slots.
    pub fn from_fn(count: usize, mut f: impl FnMut(ThumbIndex) -> T) -> Self {
        Self {
            slots: (0..count).map(|i| f(ThumbIndex(i))).collect(),
        }
    }

    /// Number of thumbs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the arena has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Validate a raw index against this arena.
    #[must_use]
    pub fn index(&self, raw: usize) -> Option<ThumbIndex> {
        ThumbIndex::new(raw, self.slots.len())
    }

    /// Slot for `index`, `None` if it belongs to a larger arena.
    #[must_use]
    pub fn get(&self, index: ThumbIndex) -> Option<&T> {
        self.slots.get(index.0)
    }

    pub fn get_mut(&mut self, index: ThumbIndex) -> Option<&mut T> {
        self.slots.get_mut(index.0)
    }

    /// All valid indices in ascending order.
    pub fn indices(&self) -> impl DoubleEndedIterator<Item = ThumbIndex> {
        (0..self.slots.len()).map(ThumbIndex)
    }

    /// Slots paired with their indices, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (ThumbIndex, &T)> {
        self.slots.iter().enumerate().map(|(i, t)| (ThumbIndex(i), t))
    }

    /// Mutable slots paired with their indices, ascending.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ThumbIndex, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .map(|(i, t)| (ThumbIndex(i), t))
    }
}

/// Panics on an index from a larger arena; use [`ThumbArena::get`] for
/// indices of unknown origin.
impl<T> Index<ThumbIndex> for ThumbArena<T> {
    type Output = T;

    fn index(&self, index: ThumbIndex) -> &T {
        &self.slots[index.0]
    }
}

impl<T> IndexMut<ThumbIndex> for ThumbArena<T> {
    fn index_mut(&mut self, index: ThumbIndex) -> &mut T {
        &mut self.slots[index.0]
    }
}
