//! 名单读取：从 Excel 指定 Sheet 的指定列提取名字列表

use crate::config::ExcelConfig;
use calamine::{open_workbook, Data, Reader, Xlsx};

/// 读取 Excel 文件获取名单列表。
///
/// 返回按行顺序排列的非空字符串（已去除首尾空白）。文件不存在或读取失败时
/// 打一条错误信息并返回空列表，不向调用方抛错。
pub fn read_names(config: &ExcelConfig) -> Vec<String> {
    if !config.filename.exists() {
        println!("❌ 错误：找不到Excel文件 '{}'", config.filename.display());
        return Vec::new();
    }

    match read_column(config) {
        Ok(names) => {
            println!("📊 成功从 Excel 读取到 {} 个名字。", names.len());
            names
        }
        Err(message) => {
            println!("❌ 读取 Excel 失败: {}", message);
            Vec::new()
        }
    }
}

fn read_column(config: &ExcelConfig) -> Result<Vec<String>, String> {
    let mut workbook: Xlsx<_> =
        open_workbook(&config.filename).map_err(|e: calamine::XlsxError| e.to_string())?;

    let range = workbook
        .worksheet_range_at(config.sheet_index)
        .ok_or_else(|| format!("Sheet {} 不存在", config.sheet_index))?
        .map_err(|e| e.to_string())?;

    let skip_rows = if config.has_header { 1 } else { 0 };

    let names = range
        .rows()
        .skip(skip_rows)
        .filter_map(|row| cell_to_string(row.get(config.column_index)))
        .collect();

    Ok(names)
}

/// 单元格转字符串：空值(Empty)和纯空白丢弃，其余按显示内容去首尾空格保留
fn cell_to_string(cell: Option<&Data>) -> Option<String> {
    let cell = cell?;
    if matches!(cell, Data::Empty) {
        return None;
    }

    let text = cell.to_string().trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_file_returns_empty() {
        let config = ExcelConfig {
            filename: PathBuf::from("不存在的名单.xlsx"),
            ..ExcelConfig::default()
        };
        assert!(read_names(&config).is_empty());
    }

    #[test]
    fn test_cell_to_string_filters_blank() {
        assert_eq!(cell_to_string(None), None);
        assert_eq!(cell_to_string(Some(&Data::Empty)), None);
        assert_eq!(cell_to_string(Some(&Data::String("  ".into()))), None);
        assert_eq!(
            cell_to_string(Some(&Data::String(" 张三 ".into()))),
            Some("张三".to_string())
        );
    }
}
