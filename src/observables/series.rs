use serde::Serialize;

/// Append-only per-generation record. Entry `k` belongs to generation `k`
/// (generation 0 is the seeded lattice).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GenerationSeries<T> {
    values: Vec<T>,
}

impl<T> Default for GenerationSeries<T> {
    fn default() -> Self {
        Self { values: Vec::new() }
    }
}

impl<T> GenerationSeries<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(generations: usize) -> Self {
        Self { values: Vec::with_capacity(generations) }
    }

    /// Append the observable for the next generation; returns its generation index.
    #[inline]
    pub fn push(&mut self, value: T) -> usize {
        self.values.push(value);
        self.values.len() - 1
    }

    #[inline] pub fn len(&self) -> usize { self.values.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.values.is_empty() }

    #[inline] pub fn get(&self, generation: usize) -> Option<&T> { self.values.get(generation) }

    #[inline] pub fn last(&self) -> Option<&T> { self.values.last() }

    #[inline] pub fn as_slice(&self) -> &[T] { &self.values }

    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.values.iter() }

    pub fn into_vec(self) -> Vec<T> { self.values }
}

impl<T> From<Vec<T>> for GenerationSeries<T> {
    fn from(values: Vec<T>) -> Self {
        Self { values }
    }
}

impl<'a, T> IntoIterator for &'a GenerationSeries<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Per-generation center-of-mass positions; `None` marks edge-touching generations.
pub type Trajectory = GenerationSeries<Option<(f64, f64)>>;

/// Per-generation live-cell counts.
pub type PopulationSeries = GenerationSeries<usize>;
