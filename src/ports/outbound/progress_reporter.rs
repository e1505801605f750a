/// ProgressReporter port for user feedback during an enrichment run
///
/// Stage progress and every diagnostic flow through here so the
/// enrichment core never prints.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports stage progress
    ///
    /// # Arguments
    /// * `current` - Current stage number
    /// * `total` - Total number of stages
    /// * `message` - Optional stage description
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or non-fatal diagnostic
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
