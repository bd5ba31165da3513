//! 运行配置：Excel 名单来源 + 模板注册表
//!
//! 启动时构造一次，之后只读传递，不存在任何全局可变状态。

use crate::error::{Result, SeatCardError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Excel 名单来源设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExcelConfig {
    /// 名单文件路径
    pub filename: PathBuf,
    /// 读取第几个 Sheet，0 表示第一个
    pub sheet_index: usize,
    /// 第一行是否为表头（true 则跳过第一行）
    pub has_header: bool,
    /// 读取第几列，0 表示 A 列
    pub column_index: usize,
}

impl Default for ExcelConfig {
    fn default() -> Self {
        Self {
            filename: PathBuf::from("名单.xlsx"),
            sheet_index: 0,
            has_header: false,
            column_index: 0,
        }
    }
}

/// 单条模板配置：文件名 + 模板内占位符
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub file: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub excel: ExcelConfig,
    /// 字数 → 模板 的静态映射
    pub templates: BTreeMap<usize, TemplateEntry>,
    /// 每次送打后的缓冲秒数，避免打印队列拥堵
    pub spool_delay_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut templates = BTreeMap::new();
        for (count, file, placeholder) in [
            (2, "2个字.docx", "模 版"),
            (3, "3个字.docx", "模板版"),
            (4, "4个字.docx", "模板模板"),
            (5, "5个字.docx", "模板模板版"),
            (6, "6个字.docx", "模板模板模板"),
            (7, "7个字.docx", "模板模板模板版"),
        ] {
            templates.insert(
                count,
                TemplateEntry {
                    file: file.to_string(),
                    placeholder: placeholder.to_string(),
                },
            );
        }

        Self {
            excel: ExcelConfig::default(),
            templates,
            spool_delay_secs: 2,
        }
    }
}

impl AppConfig {
    /// 加载配置。未指定路径时使用内置默认值。
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(SeatCardError::FileNotFound(p.display().to_string()));
                }
                let content = std::fs::read_to_string(p)?;
                let config: AppConfig = serde_json::from_str(&content)
                    .map_err(|e| SeatCardError::Config(format!("{}: {}", p.display(), e)))?;
                if config.templates.is_empty() {
                    return Err(SeatCardError::Config("模板注册表为空".into()));
                }
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// 把默认配置写到指定路径，供操作者手工修改
    pub fn write_default(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_covers_2_to_7() {
        let config = AppConfig::default();
        assert_eq!(config.templates.len(), 6);
        assert_eq!(config.templates[&2].file, "2个字.docx");
        assert_eq!(config.templates[&2].placeholder, "模 版");
        assert_eq!(config.templates[&4].placeholder, "模板模板");
        assert_eq!(config.templates[&7].file, "7个字.docx");
        assert!(!config.templates.contains_key(&8));
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = AppConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let loaded: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.templates, config.templates);
        assert_eq!(loaded.excel.filename, config.excel.filename);
        assert_eq!(loaded.spool_delay_secs, 2);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let err = AppConfig::load(Some(Path::new("不存在的配置.json"))).unwrap_err();
        assert!(matches!(err, SeatCardError::FileNotFound(_)));
    }
}
