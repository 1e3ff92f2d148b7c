//! Segment detection.
//!
//! Finds the marked pixels of a template and groups them into areas, one per
//! display segment.

mod areas;
mod template;

pub use areas::{find_areas, Area, Areas};
pub use template::{is_marked, load_template, marked_pixels};
