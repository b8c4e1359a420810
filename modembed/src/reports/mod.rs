//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod embed;
mod output;

pub use embed::{EmbedReport, EmbedResult};
pub use output::{Report, TerminalOutput};
