/// Console adapters for progress, warnings and the run summary
mod progress_reporter;
mod stdout_presenter;
mod summary_renderer;

pub use progress_reporter::StderrProgressReporter;
pub use stdout_presenter::StdoutPresenter;
pub use summary_renderer::SummaryRenderer;
