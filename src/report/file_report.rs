use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum PatchStatus {
    #[display("missing")]
    Missing,
    #[display("already present")]
    AlreadyPresent,
    #[display("inserted")]
    Inserted,
    #[display("no anchor")]
    NoAnchor,
}

/// Outcome for a single manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: String,
    pub status: PatchStatus,
    /// The line that was added, for [`PatchStatus::Inserted`].
    pub import_line: Option<String>,
}

impl FileReport {
    pub fn new(path: impl Into<String>, status: PatchStatus) -> Self {
        Self {
            path: path.into(),
            status,
            import_line: None,
        }
    }

    pub fn inserted(path: impl Into<String>, import_line: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            status: PatchStatus::Inserted,
            import_line: Some(import_line.into()),
        }
    }
}

/// Outcomes of a whole run, in manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchReport {
    files: Vec<FileReport>,
}

impl PatchReport {
    pub fn push(&mut self, report: FileReport) {
        self.files.push(report);
    }

    pub fn files(&self) -> &[FileReport] {
        &self.files
    }

    pub fn count(&self, status: PatchStatus) -> usize {
        self.files
            .iter()
            .filter(|report| report.status == status)
            .count()
    }

    pub fn summary(&self) -> String {
        let counts = [
            PatchStatus::Inserted,
            PatchStatus::AlreadyPresent,
            PatchStatus::NoAnchor,
            PatchStatus::Missing,
        ]
        .iter()
        .map(|status| format!("{} {}", self.count(*status), status))
        .collect::<Vec<_>>()
        .join(", ");
        format!("{} files checked: {}", self.files.len(), counts)
    }
}

impl FromIterator<FileReport> for PatchReport {
    fn from_iter<I: IntoIterator<Item = FileReport>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}
