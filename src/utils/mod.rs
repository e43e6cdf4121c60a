pub mod clock;
pub mod fs;
pub mod paths;

pub use clock::{Clock, FixedClock, SystemClock, format_generated_at};
pub use fs::{FileSystem, MemoryFileSystem, OsFileSystem};
pub use paths::{
    INDEX_FILENAME, SETS_DIR_NAME, display_relative, index_path, set_relative_path, students_dir,
};
