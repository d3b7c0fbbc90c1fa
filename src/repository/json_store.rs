// ==========================================
// 教師員額控管系統 - JSON 文档仓储
// ==========================================
// 职责: 整份文档的键值读写（key → <dir>/<key>.json）
// 约束: 文件缺失或非 JSON 时读取为默认文档；内容不符模型时回报错误
// ==========================================

use crate::repository::error::{RepositoryError, RepositoryResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::error::Category;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

pub const COURSES_KEY: &str = "courses";
pub const TEACHERS_KEY: &str = "teachers";
pub const SETTINGS_KEY: &str = "settings";

// ==========================================
// DocumentStore Trait
// ==========================================
pub trait DocumentStore: Send + Sync {
    /// 读取文档；不存在或非 JSON 时返回 T::default()
    fn load<T: DeserializeOwned + Default>(&self, key: &str) -> RepositoryResult<T>;

    /// 整份写入
    fn save<T: Serialize>(&self, key: &str, document: &T) -> RepositoryResult<()>;
}

// ==========================================
// JsonFileStore - 目录下的 JSON 文件
// ==========================================
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl DocumentStore for JsonFileStore {
    fn load<T: DeserializeOwned + Default>(&self, key: &str) -> RepositoryResult<T> {
        let path = self.path_for(key);

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(key = %key, "文档不存在，使用默认值");
                return Ok(T::default());
            }
            Err(e) => {
                return Err(RepositoryError::ReadError {
                    key: key.to_string(),
                    message: e.to_string(),
                })
            }
        };

        match serde_json::from_str(&raw) {
            Ok(doc) => Ok(doc),
            // 非 JSON / 截断文件 → 视同空文档
            Err(e) if matches!(e.classify(), Category::Syntax | Category::Eof) => {
                warn!(key = %key, error = %e, "文档格式错误，使用默认值");
                Ok(T::default())
            }
            // JSON 合法但内容与模型不符 → 回报错误，避免覆盖写入
            Err(e) => {
                error!(key = %key, error = %e, "文档内容无法对应模型");
                Err(RepositoryError::SerializationError(format!("{}: {}", key, e)))
            }
        }
    }

    fn save<T: Serialize>(&self, key: &str, document: &T) -> RepositoryResult<()> {
        let write_err = |e: std::io::Error| RepositoryError::WriteError {
            key: key.to_string(),
            message: e.to_string(),
        };

        let content = serde_json::to_string_pretty(document)?;

        fs::create_dir_all(&self.dir).map_err(write_err)?;

        // 先写临时文件再改名，避免写到一半的文档
        let path = self.path_for(key);
        let tmp_path = self.dir.join(format!(".{}.json.tmp", key));
        {
            let mut file = fs::File::create(&tmp_path).map_err(write_err)?;
            file.write_all(content.as_bytes()).map_err(write_err)?;
            file.sync_all().map_err(write_err)?;
        }
        fs::rename(&tmp_path, &path).map_err(write_err)?;

        debug!(key = %key, bytes = content.len(), "文档已写入");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::staffing::{DomainStaffing, StaffingDocument};
    use tempfile::tempdir;

    #[test]
    fn test_missing_document_loads_default() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        let doc: StaffingDocument = store.load(TEACHERS_KEY).unwrap();
        assert_eq!(doc, StaffingDocument::default());
    }

    #[test]
    fn test_malformed_document_loads_default() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        fs::write(store.path_for(TEACHERS_KEY), "{ not json").unwrap();

        let doc: StaffingDocument = store.load(TEACHERS_KEY).unwrap();
        assert!(doc.domains.is_empty());
    }

    #[test]
    fn test_truncated_document_loads_default() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        fs::write(store.path_for(TEACHERS_KEY), r#"{"school_year": 115, "domains": ["#).unwrap();

        let doc: StaffingDocument = store.load(TEACHERS_KEY).unwrap();
        assert!(doc.domains.is_empty());
    }

    #[test]
    fn test_mismatched_document_is_an_error() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        fs::write(
            store.path_for(TEACHERS_KEY),
            r#"{"domains": [{"id": "english", "formal_teachers": "甲"}]}"#,
        )
        .unwrap();

        let result: RepositoryResult<StaffingDocument> = store.load(TEACHERS_KEY);
        assert!(matches!(result, Err(RepositoryError::SerializationError(_))));
    }

    #[test]
    fn test_null_fields_load_as_defaults() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        fs::write(
            store.path_for(TEACHERS_KEY),
            r#"{"domains": [{"id": "english", "name": "英文", "note": null, "required_hours": 16}]}"#,
        )
        .unwrap();

        let doc: StaffingDocument = store.load(TEACHERS_KEY).unwrap();
        assert_eq!(doc.domains.len(), 1);
        assert_eq!(doc.domains[0].note, "");
        assert_eq!(doc.domains[0].required_hours, 16);
    }

    #[test]
    fn test_save_then_load_keeps_chinese_text() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested"));

        let mut doc = StaffingDocument::default();
        doc.domains.push(DomainStaffing::new("chinese_social", "國文/社會"));
        store.save(TEACHERS_KEY, &doc).unwrap();

        let raw = fs::read_to_string(store.path_for(TEACHERS_KEY)).unwrap();
        assert!(raw.contains("國文/社會"));

        let loaded: StaffingDocument = store.load(TEACHERS_KEY).unwrap();
        assert_eq!(loaded, doc);
    }
}
