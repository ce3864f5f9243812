//! Lazily evaluated, restartable tick sequences.

/// Arithmetic sequence `start, start + step, ...` of ticks below `stop`.
///
/// A zero `step` marks a degenerate axis and yields exactly one tick at
/// `start`. The range is `Copy`; every call to [`TickRange::iter`] starts
/// over from the first tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickRange {
    start: f64,
    stop: f64,
    step: f64,
}

impl TickRange {
    /// Callers derive `step` from the span and a tick count; a step that is
    /// not finite and positive yields no ticks.
    pub(crate) fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    pub fn single(value: f64) -> Self {
        Self {
            start: value,
            stop: value,
            step: 0.0,
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    /// Exclusive upper bound.
    pub fn stop(&self) -> f64 {
        self.stop
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn is_degenerate(&self) -> bool {
        self.step == 0.0
    }

    pub fn len(&self) -> usize {
        if self.is_degenerate() {
            return 1;
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return 0;
        }
        let count = ((self.stop - self.start) / self.step).ceil();
        if !count.is_finite() {
            return 0;
        }
        // negative counts saturate to 0
        count as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> Ticks {
        Ticks {
            range: *self,
            index: 0,
            len: self.len(),
        }
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }
}

impl IntoIterator for TickRange {
    type Item = f64;
    type IntoIter = Ticks;

    fn into_iter(self) -> Ticks {
        self.iter()
    }
}

impl IntoIterator for &TickRange {
    type Item = f64;
    type IntoIter = Ticks;

    fn into_iter(self) -> Ticks {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct Ticks {
    range: TickRange,
    index: usize,
    len: usize,
}

impl Iterator for Ticks {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.len {
            return None;
        }
        let value = self.range.start + self.range.step * self.index as f64;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Ticks {}
