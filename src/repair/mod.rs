//! Structural repair of pasted report Markdown.
//!
//! Each line is trimmed, classified and handed to at most one repair:
//!
//! 1. the first non-empty line becomes the `#` title,
//! 2. `N.0 text` / `N.M text` lines become `##` / `###` headings,
//! 3. lines holding a collapsed table are split into caption and rows.
//!
//! Everything else passes through unchanged apart from trimming.

mod classify;
mod heading;
mod options;
mod pipeline;
mod result;
mod table;
mod title;

pub use classify::{classify, is_table_fragment, LineClassifier, LineKind};
pub use heading::reconstruct_heading;
pub use options::RepairOptions;
pub use pipeline::{
    repair, repair_batch, repair_with_options, RepairPipeline, RepairStream, RepairedLine,
};
pub use result::{JsonFormat, RepairResult, RepairStats};
pub use table::split_table_fragment;
pub use title::{promote_title, TitleState};
