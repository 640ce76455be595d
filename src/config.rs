/// Default maximum number of elements (`rows * cols`) of a created matrix.
pub const DEFAULT_MAX_ELEMENTS: usize = 50_000;
/// Default capacity of the label index.
pub const DEFAULT_MAX_LABELS: usize = 32;
/// Default capacity of the loop-marker stack.
pub const DEFAULT_MAX_LOOP_DEPTH: usize = 32;
/// Default QL iteration cap per eigenvalue.
pub const DEFAULT_MAX_EIGEN_ITERATIONS: usize = 100;
/// Default relative tolerance used to declare an off-diagonal element zero.
pub const DEFAULT_EIGEN_TOLERANCE: f64 = 1e-10;

/// Resource limits and numeric settings of an interpreter run.
///
/// All limits are fatal when exceeded: the run aborts with a resource or
/// control-flow error rather than truncating.
///
/// # Example
/// ```
/// use calmat::config::Limits;
///
/// let limits = Limits::default().with_max_elements(100).with_max_loop_depth(4);
/// assert_eq!(limits.max_elements, 100);
/// assert_eq!(limits.max_loop_depth, 4);
/// assert_eq!(limits.max_labels, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    /// Largest `rows * cols` accepted by `load`, `matint` and `matzero`.
    pub max_elements:         usize,
    /// Largest number of labels in a script.
    pub max_labels:           usize,
    /// Deepest `while` nesting.
    pub max_loop_depth:       usize,
    /// QL iteration cap per eigenvalue in `tridiag`.
    pub max_eigen_iterations: usize,
    /// Relative tolerance of the QL convergence test.
    pub eigen_tolerance:      f64,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_elements:         DEFAULT_MAX_ELEMENTS,
               max_labels:           DEFAULT_MAX_LABELS,
               max_loop_depth:       DEFAULT_MAX_LOOP_DEPTH,
               max_eigen_iterations: DEFAULT_MAX_EIGEN_ITERATIONS,
               eigen_tolerance:      DEFAULT_EIGEN_TOLERANCE, }
    }
}

impl Limits {
    /// Sets the element budget.
    #[must_use]
    pub const fn with_max_elements(mut self, max: usize) -> Self {
        self.max_elements = max;
        self
    }

    /// Sets the label index capacity.
    #[must_use]
    pub const fn with_max_labels(mut self, max: usize) -> Self {
        self.max_labels = max;
        self
    }

    /// Sets the loop-marker stack capacity.
    #[must_use]
    pub const fn with_max_loop_depth(mut self, max: usize) -> Self {
        self.max_loop_depth = max;
        self
    }

    /// Sets the QL iteration cap.
    #[must_use]
    pub const fn with_max_eigen_iterations(mut self, max: usize) -> Self {
        self.max_eigen_iterations = max;
        self
    }

    /// Sets the QL convergence tolerance.
    #[must_use]
    pub const fn with_eigen_tolerance(mut self, tolerance: f64) -> Self {
        self.eigen_tolerance = tolerance;
        self
    }
}
