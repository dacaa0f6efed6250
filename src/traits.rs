//! Weight access for sequences that can be split.
//!
//! The splitter never looks at the elements themselves. It only needs the
//! sequence length and the weight of each element, which is what
//! [`WeightSource`] provides:
//! - plain slices of unsigned integers are their own weights,
//! - [`FnWeights`] wraps a length and an index-to-weight closure,
//! - [`MappedSlice`] pairs a slice of arbitrary items with a weight extractor.
//!
//! Weights are `u64`, so they are non-negative by construction.

/// A read-only, indexable sequence of non-negative weights.
///
/// Implementations must return a value for every `index` in `0..len()`.
/// The splitter calls [`weight`](WeightSource::weight) exactly once per element
/// while building its prefix-sum table and never afterwards.
pub trait WeightSource {
    /// Number of elements in the sequence.
    fn len(&self) -> usize;

    /// Weight of the element at `index`, `index < len()`.
    fn weight(&self, index: usize) -> u64;

    /// Returns true if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<W: WeightSource + ?Sized> WeightSource for &W {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn weight(&self, index: usize) -> u64 {
        (**self).weight(index)
    }
}

macro_rules! impl_unsigned_slice {
    ($($t:ty),*) => {
        $(
            impl WeightSource for [$t] {
                #[inline]
                fn len(&self) -> usize {
                    <[$t]>::len(self)
                }

                #[inline]
                fn weight(&self, index: usize) -> u64 {
                    self[index] as u64
                }
            }

            impl WeightSource for Vec<$t> {
                #[inline]
                fn len(&self) -> usize {
                    self.as_slice().len()
                }

                #[inline]
                fn weight(&self, index: usize) -> u64 {
                    self[index] as u64
                }
            }
        )*
    };
}

impl_unsigned_slice!(u8, u16, u32, u64, usize);

/// A sequence described by its length and a weight closure.
#[derive(Clone)]
pub struct FnWeights<F> {
    len: usize,
    weight_of: F,
}

impl<F> FnWeights<F>
where
    F: Fn(usize) -> u64,
{
    pub fn new(len: usize, weight_of: F) -> Self {
        Self { len, weight_of }
    }
}

impl<F> WeightSource for FnWeights<F>
where
    F: Fn(usize) -> u64,
{
    fn len(&self) -> usize {
        self.len
    }

    fn weight(&self, index: usize) -> u64 {
        (self.weight_of)(index)
    }
}

/// Shorthand for [`FnWeights::new`].
pub fn from_fn<F>(len: usize, weight_of: F) -> FnWeights<F>
where
    F: Fn(usize) -> u64,
{
    FnWeights::new(len, weight_of)
}

/// A slice of items whose weights come from an extractor function.
pub struct MappedSlice<'a, T, F> {
    items: &'a [T],
    weight_of: F,
}

impl<'a, T, F> MappedSlice<'a, T, F>
where
    F: Fn(&T) -> u64,
{
    pub fn new(items: &'a [T], weight_of: F) -> Self {
        Self { items, weight_of }
    }

    /// The underlying items.
    pub fn items(&self) -> &'a [T] {
        self.items
    }
}

impl<T, F> WeightSource for MappedSlice<'_, T, F>
where
    F: Fn(&T) -> u64,
{
    fn len(&self) -> usize {
        self.items.len()
    }

    fn weight(&self, index: usize) -> u64 {
        (self.weight_of)(&self.items[index])
    }
}
