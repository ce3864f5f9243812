use crate::core::binary_prefix::{self, extent, DEFAULT_TICK_COUNT};
use crate::core::number::shortest;
use crate::core::ticks::TickRange;
use crate::domain::ports::Scale;

/// Linear mapping from a data domain onto an output range with decimal ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl Default for LinearScale {
    fn default() -> Self {
        Self {
            domain: [0.0, 1.0],
            range: [0.0, 1.0],
        }
    }
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    pub fn with_domain(mut self, domain: [f64; 2]) -> Self {
        self.domain = domain;
        self
    }

    pub fn with_range(mut self, range: [f64; 2]) -> Self {
        self.range = range;
        self
    }

    /// Extends the domain outwards to multiples of the tick step.
    pub fn nice(mut self, count: Option<usize>) -> Self {
        let ticks = decimal_tick_range(self.domain, count);
        if ticks.is_degenerate() {
            return self;
        }
        let step = ticks.step();
        let [lower, upper] = extent(self.domain);
        let nice = [(lower / step).floor() * step, (upper / step).ceil() * step];
        self.domain = if self.domain[0] <= self.domain[1] {
            nice
        } else {
            [nice[1], nice[0]]
        };
        self
    }

    fn interpolate(from: [f64; 2], to: [f64; 2], value: f64) -> f64 {
        let span = from[1] - from[0];
        if span == 0.0 {
            return (to[0] + to[1]) / 2.0;
        }
        let t = (value - from[0]) / span;
        to[0] + t * (to[1] - to[0])
    }
}

impl Scale for LinearScale {
    fn domain(&self) -> [f64; 2] {
        self.domain
    }

    fn range(&self) -> [f64; 2] {
        self.range
    }

    fn apply(&self, value: f64) -> f64 {
        Self::interpolate(self.domain, self.range, value)
    }

    fn invert(&self, position: f64) -> f64 {
        Self::interpolate(self.range, self.domain, position)
    }

    fn ticks(&self, count: Option<usize>) -> TickRange {
        decimal_tick_range(self.domain, count)
    }

    fn tick_format(&self, value: f64) -> String {
        shortest(value, ".")
    }

    fn copy(&self) -> Box<dyn Scale> {
        Box::new(*self)
    }
}

/// Ticks at 1, 2 or 5 times a power of ten.
fn decimal_tick_range(domain: [f64; 2], count: Option<usize>) -> TickRange {
    let count = count.unwrap_or(DEFAULT_TICK_COUNT).max(1) as f64;
    let [lower, upper] = extent(domain);
    let span = upper - lower;

    if !(span > 0.0 && span.is_finite()) {
        return TickRange::single(lower);
    }

    let mut step = 10f64.powf((span / count).log10().floor());
    let err = count / span * step;

    if err <= 0.15 {
        step *= 10.0;
    } else if err <= 0.35 {
        step *= 5.0;
    } else if err <= 0.75 {
        step *= 2.0;
    }

    let start = (lower / step).ceil() * step;
    let stop = (upper / step).floor() * step + step * 0.5;
    TickRange::new(start, stop, step)
}

/// A [`LinearScale`] whose ticks sit on powers of two and whose labels use
/// binary prefixes (`KiB`, `MiB`, ...). Copies keep both overrides.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BinaryScale {
    linear: LinearScale,
}

impl BinaryScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self {
            linear: LinearScale::new(domain, range),
        }
    }

    pub fn with_domain(self, domain: [f64; 2]) -> Self {
        Self {
            linear: self.linear.with_domain(domain),
        }
    }

    pub fn with_range(self, range: [f64; 2]) -> Self {
        Self {
            linear: self.linear.with_range(range),
        }
    }

    /// Rounds the upper end of the domain up with [`binary_prefix::ceil`] so
    /// the axis ends on a whole unit.
    pub fn ceil_domain(self) -> Self {
        let [lower, upper] = extent(self.linear.domain);
        self.with_domain([lower, binary_prefix::ceil(upper)])
    }

    pub fn linear(&self) -> &LinearScale {
        &self.linear
    }
}

impl From<LinearScale> for BinaryScale {
    fn from(linear: LinearScale) -> Self {
        Self { linear }
    }
}

impl Scale for BinaryScale {
    fn domain(&self) -> [f64; 2] {
        self.linear.domain()
    }

    fn range(&self) -> [f64; 2] {
        self.linear.range()
    }

    fn apply(&self, value: f64) -> f64 {
        self.linear.apply(value)
    }

    fn invert(&self, position: f64) -> f64 {
        self.linear.invert(position)
    }

    fn ticks(&self, count: Option<usize>) -> TickRange {
        binary_prefix::tick_range(self.linear.domain(), count)
    }

    fn tick_format(&self, value: f64) -> String {
        binary_prefix::format(value)
    }

    fn copy(&self) -> Box<dyn Scale> {
        Box::new(*self)
    }
}
