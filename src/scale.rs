use std::collections::HashMap;
use std::hash::Hash;

// ---------------------------------------------------------------------------
// Band scale: discrete keys → equal-width pixel intervals
// ---------------------------------------------------------------------------

/// Maps a finite set of keys onto contiguous bands spanning `range`.
///
/// The domain keeps the first occurrence of each key, in insertion order.
/// Bands have no inner or outer padding and are centred in the range.
#[derive(Debug, Clone)]
pub struct BandScale<K> {
    domain: Vec<K>,
    index: HashMap<K, usize>,
    range: (f64, f64),
    round: bool,
    start: f64,
    step: f64,
}

impl<K: Copy + Eq + Hash> BandScale<K> {
    pub fn new(domain: impl IntoIterator<Item = K>, range: (f64, f64)) -> Self {
        let mut keys = Vec::new();
        let mut index = HashMap::new();
        for key in domain {
            if let std::collections::hash_map::Entry::Vacant(slot) = index.entry(key) {
                slot.insert(keys.len());
                keys.push(key);
            }
        }
        let mut scale = BandScale {
            domain: keys,
            index,
            range,
            round: false,
            start: range.0,
            step: 0.0,
        };
        scale.rescale();
        scale
    }

    /// Snap step and offset to whole pixels.
    pub fn rounded(mut self) -> Self {
        self.round = true;
        self.rescale();
        self
    }

    fn rescale(&mut self) {
        let (r0, r1) = self.range;
        let n = self.domain.len() as f64;
        let mut step = (r1 - r0) / n.max(1.0);
        if self.round {
            step = step.floor();
        }
        let mut start = r0 + (r1 - r0 - step * n) * 0.5;
        if self.round {
            start = start.round();
        }
        self.step = step;
        self.start = start;
    }

    /// Start of the band for `key`, `None` when the key is not in the domain.
    pub fn apply(&self, key: &K) -> Option<f64> {
        self.index
            .get(key)
            .map(|&i| self.start + self.step * i as f64)
    }

    /// Middle of the band for `key`.
    pub fn center(&self, key: &K) -> Option<f64> {
        self.apply(key).map(|x| x + self.bandwidth() / 2.0)
    }

    /// Distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn bandwidth(&self) -> f64 {
        self.step
    }

    pub fn domain(&self) -> &[K] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

// ---------------------------------------------------------------------------
// Linear scale: continuous domain → continuous range
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        LinearScale { domain, range }
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        // Degenerate domain maps everything to the middle of the range.
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        r0 + t * (r1 - r0)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

// ---------------------------------------------------------------------------
// Threshold scale: continuous value → one of N outputs via N-1 cut-points
// ---------------------------------------------------------------------------

/// Step function over ascending cut-points.
///
/// `apply(v)` returns `outputs[i]` for the first `i` with `v < cuts[i]`,
/// and the last output when `v` is at or above every cut-point.
#[derive(Debug, Clone)]
pub struct ThresholdScale<T> {
    cuts: Vec<f64>,
    outputs: Vec<T>,
}

impl<T> ThresholdScale<T> {
    pub fn new(cuts: Vec<f64>, outputs: Vec<T>) -> Self {
        ThresholdScale { cuts, outputs }
    }

    /// Index of the bucket `value` falls into. `None` for NaN.
    pub fn bucket(&self, value: f64) -> Option<usize> {
        if value.is_nan() {
            return None;
        }
        let i = self
            .cuts
            .iter()
            .position(|&cut| value < cut)
            .unwrap_or(self.cuts.len());
        Some(i.min(self.outputs.len().checked_sub(1)?))
    }

    pub fn apply(&self, value: f64) -> Option<&T> {
        self.bucket(value).and_then(|i| self.outputs.get(i))
    }

    /// Value interval covered by output `i`; open ends are `None`.
    pub fn invert_extent(&self, i: usize) -> (Option<f64>, Option<f64>) {
        let lower = i.checked_sub(1).and_then(|j| self.cuts.get(j)).copied();
        let upper = self.cuts.get(i).copied();
        (lower, upper)
    }

    pub fn cuts(&self) -> &[f64] {
        &self.cuts
    }

    pub fn outputs(&self) -> &[T] {
        &self.outputs
    }
}
