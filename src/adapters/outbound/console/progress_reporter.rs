use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::io::IsTerminal;

const BAR_TEMPLATE: &str = "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} - {msg}";
const WARNING_PREFIX: &str = "⚠️  ";

fn warning_line(message: &str) -> String {
    format!("{}{}", WARNING_PREFIX, message)
}

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing to stderr so
/// progress never mixes with the summary on stdout. Artifact persistence
/// drives an indicatif bar; warnings are highlighted when stderr is a terminal.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
    colored: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            colored: std::io::stderr().is_terminal(),
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            return pb.clone();
        }

        let pb = ProgressBar::new(total as u64);
        // The template is a constant; fall back to the default bar if it is ever rejected.
        let style = ProgressStyle::default_bar()
            .template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        pb.set_style(style);
        *pb_option = Some(pb.clone());
        pb
    }

    /// Clears and drops the current bar so the next batch starts fresh
    fn finish_progress_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
        if current >= total {
            self.finish_progress_bar();
        }
    }

    fn report_warning(&self, message: &str) {
        self.finish_progress_bar();
        let line = warning_line(message);
        if self.colored {
            eprintln!("{}", line.yellow());
        } else {
            eprintln!("{}", line);
        }
    }

    fn report_completion(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!();
        if self.colored {
            eprintln!("{}", message.green().bold());
        } else {
            eprintln!("{}", message);
        }
    }
}
