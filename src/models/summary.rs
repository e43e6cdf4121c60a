use std::path::PathBuf;

/// Result of indexing one student
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentReport {
    pub prefix: String,
    pub student_id: String,
    pub set_count: usize,
    pub index_path: PathBuf,
}

/// Totals for a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub students: Vec<StudentReport>,
}

impl RunSummary {
    pub fn students_processed(&self) -> usize {
        self.students.len()
    }

    pub fn total_sets(&self) -> usize {
        self.students.iter().map(|s| s.set_count).sum()
    }
}

/// Successful outcome of a run; failures are the `Err` side of the driver's `Result`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// `data/students` does not exist
    NothingToDo,
    Completed(RunSummary),
}
