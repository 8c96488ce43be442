//! showbiz-storage-text
//!
//! Flat-file persistence for finance records: one comma-separated line per
//! record, written atomically through a temporary sibling file.

pub mod codec;

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use showbiz_core::{
    storage::{LoadReport, RecordStorage, SaveOutcome},
    CoreError,
};
use showbiz_domain::FinanceRecord;

pub use codec::{CodecOptions, RecordCodec};

const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed text persistence for finance records.
#[derive(Debug, Clone, Default)]
pub struct TextRecordStorage {
    codec: RecordCodec,
}

impl TextRecordStorage {
    pub fn new(options: CodecOptions) -> Self {
        Self {
            codec: RecordCodec::new(options),
        }
    }

    pub fn options(&self) -> CodecOptions {
        self.codec.options()
    }
}

impl RecordStorage for TextRecordStorage {
    fn save_records(
        &self,
        path: &Path,
        records: &[FinanceRecord],
    ) -> Result<SaveOutcome, CoreError> {
        if records.is_empty() {
            tracing::warn!(path = %path.display(), "no records to save; file left untouched");
            return Ok(SaveOutcome::NothingToSave);
        }
        if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = tmp_path(path);
        if let Err(err) = write_records(&self.codec, &tmp, records) {
            let _ = fs::remove_file(&tmp);
            tracing::error!(path = %path.display(), error = %err, "error saving records");
            return Err(err);
        }
        fs::rename(&tmp, path)?;
        Ok(SaveOutcome::Written {
            path: path.to_path_buf(),
            count: records.len(),
        })
    }

    fn load_records(&self, path: &Path, today: NaiveDate) -> Result<LoadReport, CoreError> {
        if !path.exists() {
            tracing::error!(path = %path.display(), "records file not found");
            return Err(CoreError::FileNotFound(path.to_path_buf()));
        }
        let file = File::open(path)?;
        self.codec.decode(BufReader::new(file), today)
    }
}

fn write_records(
    codec: &RecordCodec,
    path: &Path,
    records: &[FinanceRecord],
) -> Result<(), CoreError> {
    let mut writer = BufWriter::new(File::create(path)?);
    codec.encode(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
