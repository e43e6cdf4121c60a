//! Index storage
//!
//! Each student gets one `index.json` next to its `sets` directory. Every run
//! replaces the file wholesale; nothing is merged with or diffed against the
//! previous contents, and stale files for students that lost their `sets`
//! directory are left alone.

pub mod persistence;

pub use persistence::{load_index, render_index, write_index};
