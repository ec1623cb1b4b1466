/// Type modifier marking a depot file as always writable in client workspaces.
pub const WRITABLE_FLAG: &str = "+w";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepotFileRecord {
    pub path: String,
    pub file_type: Option<String>,
}

impl DepotFileRecord {
    pub fn new(path: impl Into<String>, file_type: Option<String>) -> Self {
        Self {
            path: path.into(),
            file_type,
        }
    }

    pub fn has_writable_flag(&self) -> bool {
        self.file_type
            .as_deref()
            .is_some_and(|t| t.contains(WRITABLE_FLAG))
    }

    /// `<path> (<type>)`, the line format used for both the report and the output file.
    pub fn display_line(&self) -> String {
        format!(
            "{} ({})",
            self.path,
            self.file_type.as_deref().unwrap_or("unknown")
        )
    }
}
