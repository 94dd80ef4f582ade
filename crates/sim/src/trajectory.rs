use std::ops::Index;
use std::slice;

use serde::Serialize;

use crate::frequency::FrequencyVector;

/// The generation-by-generation history of one projection.
///
/// Index 0 is the caller's initial vector verbatim; index `g` is the
/// distribution after `g` generations, so a projection over `n` generations
/// stores `n + 1` states. Immutable once produced; constructed only by the
/// projection functions, which never produce an empty one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    states: Vec<FrequencyVector>,
}

impl Trajectory {
    pub(crate) fn new(states: Vec<FrequencyVector>) -> Self {
        debug_assert!(!states.is_empty());
        Self { states }
    }

    /// All states in generation order.
    #[inline(always)]
    pub fn states(&self) -> &[FrequencyVector] {
        &self.states
    }

    /// The state after `generation` steps, if within range.
    #[inline]
    pub fn get(&self, generation: usize) -> Option<&FrequencyVector> {
        self.states.get(generation)
    }

    /// The initial vector (generation 0).
    #[inline]
    pub fn initial(&self) -> &FrequencyVector {
        &self.states[0]
    }

    /// The state after the last projected generation.
    #[inline]
    pub fn final_state(&self) -> &FrequencyVector {
        &self.states[self.states.len() - 1]
    }

    /// Number of projected generations (one less than the state count).
    #[inline]
    pub fn generations(&self) -> usize {
        self.states.len() - 1
    }

    /// Number of stored states, including generation 0.
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// False for every trajectory the crate can produce.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate states in generation order.
    pub fn iter(&self) -> slice::Iter<'_, FrequencyVector> {
        self.states.iter()
    }
}

impl Index<usize> for Trajectory {
    type Output = FrequencyVector;

    #[inline]
    fn index(&self, generation: usize) -> &FrequencyVector {
        &self.states[generation]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a FrequencyVector;
    type IntoIter = slice::Iter<'a, FrequencyVector>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
