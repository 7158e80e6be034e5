use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Stem used for generated files: the file name without its extension and
/// without a trailing `.schema` token (`widget.schema.json` -> `widget`).
pub fn output_stem(schema_file: &Path) -> String {
    let stem = schema_file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    match stem.strip_suffix(".schema") {
        Some(stripped) => stripped.to_string(),
        None => stem,
    }
}

/// File name of the generated source for `schema_file` with the given
/// extension (no leading dot).
pub fn output_file_name(schema_file: &Path, extension: &str) -> String {
    format!("{}.{}", output_stem(schema_file), extension)
}

/// A file to be generated
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Write the file, truncating any existing content.
    ///
    /// Returns the number of bytes written.
    pub fn write(&self) -> Result<usize> {
        write_file(&self.path, &self.content)?;
        Ok(self.content.len())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "hello").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_truncates_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.ts");

        fs::write(&path, "a much longer original content").unwrap();

        let file = File::new(&path, "short");
        let written = file.write().unwrap();

        assert_eq!(written, 5);
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_output_stem_strips_schema_token() {
        assert_eq!(output_stem(Path::new("widget.schema.json")), "widget");
        assert_eq!(output_stem(Path::new("dir/order.JSON")), "order");
        assert_eq!(output_stem(Path::new("schema.json")), "schema");
        assert_eq!(output_stem(Path::new("a.schema.b.json")), "a.schema.b");
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(
            output_file_name(Path::new("widget.schema.json"), "ts"),
            "widget.ts"
        );
        assert_eq!(output_file_name(Path::new("widget.json"), "cs"), "widget.cs");
    }
}
