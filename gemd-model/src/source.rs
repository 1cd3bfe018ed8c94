gemd_record! {
    /// Pointer to an external file.
    pub struct FileLink = "file_link" {
        pub filename: String,
        pub url: String,
    }
}

gemd_record! {
    /// Who performed a process or measurement, and when.
    pub struct PerformedSource = "performed_source" {
        pub performed_by: Option<String>,
        pub performed_date: Option<String>,
    }
}

impl FileLink {
    pub fn new(filename: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            url: url.into(),
        }
    }
}
