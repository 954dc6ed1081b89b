/// ProgressReporter port for reporting progress during a report run
///
/// This port abstracts progress reporting (e.g., to stderr) so the use case
/// can surface steps and non-fatal warnings without knowing the console.
pub trait ProgressReporter {
    /// Reports a step or status message
    fn report(&self, message: &str);

    /// Reports progress over a known number of items
    ///
    /// # Arguments
    /// * `current` - Items done so far
    /// * `total` - Total expected items
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a non-fatal condition; the run continues
    fn report_warning(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
