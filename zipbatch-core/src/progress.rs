use std::path::Path;

use crate::domain::ArchiveRecord;

/// Pipeline milestones, in the order they happen.
#[derive(Debug)]
pub enum Event<'a> {
    Enumerated { files: usize, batches: usize },
    ArchiveStarted { index: usize, name: &'a str, entries: usize },
    EntryAdded { name: &'a str },
    ArchiveFinished(&'a ArchiveRecord),
    CleanupStarted { files: usize },
    Deleted { path: &'a Path },
}

pub trait Observer {
    fn on_event(&mut self, event: &Event<'_>);
}

/// Silent observer.
impl Observer for () {
    fn on_event(&mut self, _event: &Event<'_>) {}
}
