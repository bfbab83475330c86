use anyhow::{Context, Result};
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

/// Writes the report to disk via a temporary file and an atomic rename.
pub fn save_report(filename: &Path, contents: &str) -> Result<()> {
    let temp_filename = filename.with_extension("tmp");

    let mut file = File::create(&temp_filename)
        .with_context(|| format!("Failed to create temporary file: {:?}", temp_filename))?;

    file.write_all(contents.as_bytes())
        .with_context(|| "Failed to write report to temporary file")?;

    file.sync_all()
        .with_context(|| "Failed to sync temporary file")?;

    std::fs::rename(&temp_filename, filename)
        .with_context(|| format!("Failed to rename temporary file to {:?}", filename))?;

    Ok(())
}

/// Suggested filename for an exported report, derived from the organization
/// type the way the generation pipeline names its own output files.
pub fn suggested_report_filename(org_type: &str) -> String {
    format!("Grant_Report_{}.md", org_type.replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_save_report_writes_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.md");

        save_report(&path, "# Report\nBody").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "# Report\nBody");
        assert!(!dir.path().join("report.tmp").exists());
    }

    #[test]
    fn test_save_report_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.md");
        fs::write(&path, "old").unwrap();

        save_report(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_save_report_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.md");
        assert!(save_report(&path, "body").is_err());
    }

    #[test]
    fn test_suggested_report_filename() {
        assert_eq!(
            suggested_report_filename("Non-profit NGO"),
            "Grant_Report_Non-profit_NGO.md"
        );
        assert_eq!(suggested_report_filename("Startup"), "Grant_Report_Startup.md");
    }
}
