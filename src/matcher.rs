//! 模板匹配：按去空格后的字数查找模板注册表，生成打印任务

use crate::config::TemplateEntry;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// 单个打印任务。匹配成功时生成，打印后即丢弃，不做任何持久化。
#[derive(Debug, Clone)]
pub struct PrintJob {
    /// 打印原本的内容（Excel 里是啥就是啥）
    pub name: String,
    /// 去除空格后的名字，用于显示
    pub clean_name: String,
    /// 去除空格后的字数
    pub char_count: usize,
    /// 匹配到的模板文件名
    pub template: PathBuf,
    /// 该模板内的占位符
    pub placeholder: String,
}

/// 去除名字内部的所有空格（半角空格和全角空格），得到真实字数用的干净名字
pub fn clean_name(name: &str) -> String {
    name.chars().filter(|c| *c != ' ' && *c != '　').collect()
}

/// 对每个名字查注册表：命中生成一个任务，未命中打一条跳过警告。
/// 不做模糊匹配，也没有兜底模板。
pub fn build_jobs(names: &[String], registry: &BTreeMap<usize, TemplateEntry>) -> Vec<PrintJob> {
    let mut jobs = Vec::new();

    for name in names {
        let clean = clean_name(name);
        let count = clean.chars().count();

        match registry.get(&count) {
            Some(entry) => {
                jobs.push(PrintJob {
                    name: name.clone(),
                    clean_name: clean,
                    char_count: count,
                    template: PathBuf::from(&entry.file),
                    placeholder: entry.placeholder.clone(),
                });
            }
            None => {
                println!("⚠️  跳过: '{}' (长度{}字，未配置对应模板)", name, count);
            }
        }
    }

    jobs
}
