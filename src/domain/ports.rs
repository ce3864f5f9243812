use crate::core::ticks::TickRange;

/// A continuous axis scale mapping a data domain onto a pixel range.
///
/// Implementations customise tick generation and labelling; `copy` must
/// return a scale of the same kind so the customisation survives cloning.
pub trait Scale: Send + Sync {
    fn domain(&self) -> [f64; 2];
    fn range(&self) -> [f64; 2];
    fn apply(&self, value: f64) -> f64;
    fn invert(&self, position: f64) -> f64;
    /// `None` requests the default of ten ticks.
    fn ticks(&self, count: Option<usize>) -> TickRange;
    fn tick_format(&self, value: f64) -> String;
    fn copy(&self) -> Box<dyn Scale>;
}

impl Clone for Box<dyn Scale> {
    fn clone(&self) -> Self {
        self.copy()
    }
}
