use indicatif::{ProgressBar, ProgressStyle};
use zipbatch_core::{Event, Observer};

const BAR_TEMPLATE: &str = "{prefix:>18} [{bar:40.cyan/blue}] {pos}/{len} {msg}";

/// Drives terminal progress bars (stderr) and the human summary lines
/// (stdout) from pipeline events.
pub struct TerminalProgress {
    visible: bool,
    extension: String,
    batches: u64,
    archives: Option<ProgressBar>,
    cleanup: Option<ProgressBar>,
}

impl TerminalProgress {
    pub fn new(visible: bool, extension: &str) -> Self {
        Self {
            visible,
            extension: extension.trim_start_matches('.').to_string(),
            batches: 0,
            archives: None,
            cleanup: None,
        }
    }

    fn bar(&self, len: u64, label: &'static str) -> ProgressBar {
        if !self.visible {
            return ProgressBar::hidden();
        }
        let style = ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        ProgressBar::new(len).with_style(style).with_prefix(label)
    }

    fn say(&self, line: String) {
        if !self.visible {
            return;
        }
        match &self.archives {
            Some(pb) => pb.suspend(|| println!("{line}")),
            None => println!("{line}"),
        }
    }

    /// Clears any bar still on screen.
    pub fn finish(&mut self) {
        for pb in [self.archives.take(), self.cleanup.take()].into_iter().flatten() {
            pb.finish_and_clear();
        }
    }
}

impl Observer for TerminalProgress {
    fn on_event(&mut self, event: &Event<'_>) {
        match event {
            Event::Enumerated { files, batches } => {
                self.batches = *batches as u64;
                self.say(format!("Found {files} .{} files", self.extension));
                self.say(format!("Will create {batches} zip files"));
            }
            Event::ArchiveStarted { name, .. } => {
                if self.archives.is_none() {
                    self.archives = Some(self.bar(self.batches, "Creating zip files"));
                }
                if let Some(pb) = &self.archives {
                    pb.set_message(name.to_string());
                }
            }
            Event::EntryAdded { .. } => {}
            Event::ArchiveFinished(record) => {
                self.say(format!(
                    "  {} ({} files)",
                    record.path.display(),
                    record.entries
                ));
                if let Some(pb) = &self.archives {
                    pb.inc(1);
                }
            }
            Event::CleanupStarted { files } => {
                if let Some(pb) = self.archives.take() {
                    pb.finish_and_clear();
                }
                self.cleanup = Some(self.bar(*files as u64, "Deleting sources"));
            }
            Event::Deleted { .. } => {
                if let Some(pb) = &self.cleanup {
                    pb.inc(1);
                }
            }
        }
    }
}
