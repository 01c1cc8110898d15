use std::{fmt, io::Error, path::PathBuf};

use serde::{Serialize, de::DeserializeOwned};

use crate::types::CsvRow;

#[derive(Debug)]
pub enum TableError {
    IoError(PathBuf, Error),
    CsvError(PathBuf, csv::Error),
    CriticalError(String),
}

impl From<csv::Error> for TableError {
    fn from(err: csv::Error) -> Self {
        TableError::CsvError(PathBuf::new(), err)
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::IoError(path, e) => write!(f, "{}: {}", path.display(), e),
            TableError::CsvError(path, e) => write!(f, "{}: {}", path.display(), e),
            TableError::CriticalError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for TableError {}

/// A CSV file handed from one stage to the next.
///
/// Rows are read whole into memory and written back whole; the file on disk
/// is overwritten on every persist.
pub struct TableManager<T> {
    path: PathBuf,
    rows: Vec<T>,
}

impl<T> TableManager<T> {
    pub fn new(path: impl Into<PathBuf>, rows: Vec<T>) -> Self {
        Self {
            path: path.into(),
            rows,
        }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<T> {
        self.rows
    }

    pub fn count(&self) -> usize {
        self.rows.len()
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl<T: DeserializeOwned> TableManager<T> {
    /// Reads every row of `path`, matching columns by (trimmed) header name.
    /// Columns the row type does not name are ignored.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, TableError> {
        let path = path.into();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| TableError::IoError(path.clone(), e))?;
        let rows = Self::parse(&content).map_err(|e| match e {
            TableError::CsvError(_, e) => TableError::CsvError(path.clone(), e),
            other => other,
        })?;
        Ok(Self { path, rows })
    }

    pub fn parse(content: &str) -> Result<Vec<T>, TableError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(content.as_bytes());
        let mut rows = Vec::new();
        for row in reader.deserialize() {
            rows.push(row?);
        }
        Ok(rows)
    }
}

impl<T: Serialize + CsvRow> TableManager<T> {
    pub fn to_csv(&self) -> Result<String, TableError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(T::HEADERS)?;
        for row in &self.rows {
            writer.serialize(row)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| TableError::CriticalError(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| TableError::CriticalError(e.to_string()))
    }

    pub async fn persist(&self) -> Result<(), TableError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent)
                    .await
                    .map_err(|e| TableError::IoError(parent.to_path_buf(), e))?;
            }
        }

        let content = self.to_csv()?;
        async_fs::write(&self.path, content)
            .await
            .map_err(|e| TableError::IoError(self.path.clone(), e))
    }
}
