use std::io;

use zipbatch_core::error::Result;
use zipbatch_core::{BatchConfig, Summary, run};

use crate::presentation::progress::TerminalProgress;

/// How results are reported.
#[derive(Clone, Copy, Debug, Default)]
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    fn chatty(self) -> bool {
        !self.json && !self.quiet
    }
}

pub fn handle_batch(cfg: &BatchConfig, out: Output) -> Result<Summary> {
    let mut progress = TerminalProgress::new(out.chatty(), &cfg.source_extension);
    let result = run(cfg, &mut progress);
    progress.finish();
    let summary = result?;

    if out.json {
        let body = serde_json::to_string_pretty(&summary).map_err(io::Error::from)?;
        println!("{body}");
    } else if out.chatty() {
        print_summary(&summary);
    }
    Ok(summary)
}

fn print_summary(summary: &Summary) {
    if summary.dry_run {
        for a in &summary.archives {
            println!("  would write {} ({} files)", a.path.display(), a.entries);
        }
        println!("Dry run: nothing written, nothing deleted");
        return;
    }
    println!("{}", written_line(summary));
    if summary.files_deleted > 0 {
        println!("Deleted {} source files", summary.files_deleted);
    }
}

/// One-line account of what was written; the ratio is left off when
/// there is nothing to compare.
fn written_line(summary: &Summary) -> String {
    let mut line = format!(
        "Wrote {} archives, {} -> {} bytes",
        summary.archives.len(),
        summary.bytes_in(),
        summary.bytes_out()
    );
    if let Some(ratio) = summary.compression_ratio() {
        line.push_str(&format!(" ({:.1}%)", ratio * 100.0));
    }
    line
}
