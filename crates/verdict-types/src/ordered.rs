//! Ordered-container capability.
//!
//! A container that can report its length and compare two of its elements
//! by index. `IsSorted` accepts any value wrapping an [`OrderedContainer`].

use std::fmt;
use std::sync::Arc;

// ── Capability ──────────────────────────────────────────────────────────

/// Length plus pairwise less-than over element indices.
pub trait OrderedContainer: fmt::Debug + Send + Sync {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Whether element `i` sorts strictly before element `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Whether the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name reported in type descriptors and diagnostics.
    fn type_name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared handle to an ordered container stored inside a [`Value`](crate::Value).
///
/// Two handles are equal only when they point at the same container.
#[derive(Clone)]
pub struct OrderedValue(Arc<dyn OrderedContainer>);

impl OrderedValue {
    pub fn new<C: OrderedContainer + 'static>(container: C) -> Self {
        Self(Arc::new(container))
    }

    pub fn from_arc(container: Arc<dyn OrderedContainer>) -> Self {
        Self(container)
    }

    pub fn container(&self) -> &dyn OrderedContainer {
        self.0.as_ref()
    }

    pub fn same_container(&self, other: &OrderedValue) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

impl PartialEq for OrderedValue {
    fn eq(&self, other: &Self) -> bool {
        self.same_container(other)
    }
}

impl fmt::Debug for OrderedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for OrderedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(len={})", self.0.type_name(), self.0.len())
    }
}

// ── Adapters ────────────────────────────────────────────────────────────

/// Slice ordered by the natural `PartialOrd` of its elements.
#[derive(Clone, Debug, PartialEq)]
pub struct SortedSlice<T> {
    items: Vec<T>,
}

impl<T> SortedSlice<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T> OrderedContainer for SortedSlice<T>
where
    T: PartialOrd + fmt::Debug + Send + Sync,
{
    fn len(&self) -> usize {
        self.items.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.items[i] < self.items[j]
    }
}

/// Slice ordered by a caller-supplied less-than function.
pub struct SortBy<T, F> {
    items: Vec<T>,
    less: F,
}

impl<T, F> SortBy<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    pub fn new(items: Vec<T>, less: F) -> Self {
        Self { items, less }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T: fmt::Debug, F> fmt::Debug for SortBy<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortBy")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl<T, F> OrderedContainer for SortBy<T, F>
where
    T: fmt::Debug + Send + Sync,
    F: Fn(&T, &T) -> bool + Send + Sync,
{
    fn len(&self) -> usize {
        self.items.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        (self.less)(&self.items[i], &self.items[j])
    }
}
