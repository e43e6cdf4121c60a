//! Filename parsing for set files
//!
//! Set files are named `YYMMDD.json`. The stem is the only datum read from a set
//! file; contents are never opened. A stem that is not a valid date is not an
//! error, it simply becomes an undated entry labelled by its raw stem.

pub mod set_date;

pub use set_date::{SET_FILE_EXTENSION, SetDate, parse_set_date, set_stem};
