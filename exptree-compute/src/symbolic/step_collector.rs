/// A type that collects the steps taken while transforming an expression.
///
/// [`StepCollector`] is implemented for the unit type `()`, which discards every step, and for
/// [`Vec`], which records them in order. The simplifier takes a `&mut dyn StepCollector<Step>`,
/// so callers decide whether the steps are worth keeping.
///
/// ```
/// use exptree_compute::symbolic::{simplify_with, Step, StepCollector};
/// use exptree_parser::parse;
///
/// /// Counts the steps instead of storing them.
/// struct Counter(usize);
///
/// impl StepCollector<Step> for Counter {
///     fn push(&mut self, _: Step) {
///         self.0 += 1;
///     }
/// }
///
/// let mut counter = Counter(0);
/// simplify_with(&parse("x * 1 + 0").unwrap(), &mut counter);
/// assert_eq!(counter.0, 2);
/// ```
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
