//! 名单 → 匹配 → 填充 全链路测试（不含真实送打）
//!
//! 模板 docx 现场构造，验证任务匹配结果能正确驱动占位符替换

use seatcard_print::config::AppConfig;
use seatcard_print::{docx, matcher};
use std::io::{Cursor, Read, Write};
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

/// 构造最小可用的 docx：正文和页眉各出现一次占位符
fn build_template(placeholder: &str) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p></w:body></w:document>"#,
        placeholder
    );
    let header = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:hdr xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p></w:hdr>"#,
        placeholder
    );

    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"/>"#)
        .unwrap();
    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(document.as_bytes()).unwrap();
    zip.start_file("word/header1.xml", options).unwrap();
    zip.write_all(header.as_bytes()).unwrap();

    zip.finish().unwrap().into_inner()
}

fn part_text(docx_bytes: &[u8], part: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(docx_bytes)).unwrap();
    let mut file = archive.by_name(part).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

#[test]
fn test_jobs_drive_replacement_end_to_end() {
    let registry = AppConfig::default().templates;
    let names = vec![
        "张三".to_string(),
        "李小龙".to_string(),
        "王二麻子".to_string(),
    ];

    let jobs = matcher::build_jobs(&names, &registry);
    assert_eq!(jobs.len(), 3);

    for job in &jobs {
        let template = build_template(&job.placeholder);
        let filled = docx::replace_placeholder(&template, &job.placeholder, &job.name).unwrap();

        let body = part_text(&filled, "word/document.xml");
        let header = part_text(&filled, "word/header1.xml");

        assert!(body.contains(&job.name), "正文应包含 {}", job.name);
        assert!(header.contains(&job.name), "页眉应包含 {}", job.name);
        assert!(!body.contains(&job.placeholder));
        assert!(!header.contains(&job.placeholder));
    }
}

#[test]
fn test_name_with_space_printed_as_is() {
    let registry = AppConfig::default().templates;
    let names = vec!["陈 伟".to_string()];

    let jobs = matcher::build_jobs(&names, &registry);
    assert_eq!(jobs.len(), 1);
    // 按2字匹配模板，但打印内容保留原始空格
    assert_eq!(jobs[0].template.to_str(), Some("2个字.docx"));

    let template = build_template(&jobs[0].placeholder);
    let filled = docx::replace_placeholder(&template, &jobs[0].placeholder, &jobs[0].name).unwrap();

    assert!(part_text(&filled, "word/document.xml").contains("陈 伟"));
}
