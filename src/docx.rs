//! docx 占位符替换
//!
//! .docx 是一个 zip 包，正文、页眉、页脚、脚注分属不同的 XML part，
//! 文本框内容内联在正文 part 里。替换时逐个改写这些文字 part 中
//! `<w:t>` 元素的文本，其余 part 原样拷贝。

use crate::error::{Result, SeatCardError};
use quick_xml::events::{BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io::{Cursor, Read, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// 对整个 docx 包做一次字面替换：所有文字 part 中出现的 placeholder
/// 全部替换为 replacement，返回改写后的完整 docx 字节。
pub fn replace_placeholder(docx: &[u8], placeholder: &str, replacement: &str) -> Result<Vec<u8>> {
    let mut archive = ZipArchive::new(Cursor::new(docx))
        .map_err(|e| SeatCardError::DocxRewrite(format!("zip 打开失败: {}", e)))?;
    let mut out = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for index in 0..archive.len() {
        let mut part = archive
            .by_index(index)
            .map_err(|e| SeatCardError::DocxRewrite(format!("zip 条目读取失败: {}", e)))?;
        let name = part.name().to_string();

        if part.is_dir() {
            out.add_directory(name, options)
                .map_err(|e| SeatCardError::DocxRewrite(e.to_string()))?;
            continue;
        }

        let mut content = Vec::new();
        part.read_to_end(&mut content)?;

        let content = if is_story_part(&name) {
            replace_in_story_xml(&content, placeholder, replacement)?
        } else {
            content
        };

        out.start_file(name, options)
            .map_err(|e| SeatCardError::DocxRewrite(e.to_string()))?;
        out.write_all(&content)?;
    }

    let cursor = out
        .finish()
        .map_err(|e| SeatCardError::DocxRewrite(e.to_string()))?;
    Ok(cursor.into_inner())
}

/// 文字 part 判定：正文（含内联文本框）、页眉、页脚、脚注、尾注
fn is_story_part(name: &str) -> bool {
    match name {
        "word/document.xml" | "word/footnotes.xml" | "word/endnotes.xml" => true,
        _ => {
            (name.starts_with("word/header") || name.starts_with("word/footer"))
                && name.ends_with(".xml")
        }
    }
}

/// 改写单个 XML part：只动 `<w:t>` 内的文本，结构和属性全部保持原样
fn replace_in_story_xml(xml: &[u8], placeholder: &str, replacement: &str) -> Result<Vec<u8>> {
    let mut reader = Reader::from_reader(xml);
    let mut writer = Writer::new(Vec::new());
    let mut buf = Vec::new();
    let mut text_depth = 0usize;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| SeatCardError::DocxRewrite(format!("XML 解析失败: {}", e)))?;

        match event {
            Event::Eof => break,
            Event::Start(e) => {
                if e.name().as_ref() == b"w:t" {
                    text_depth += 1;
                }
                writer.write_event(Event::Start(e))
                    .map_err(|e| SeatCardError::DocxRewrite(e.to_string()))?;
            }
            Event::End(e) => {
                if e.name().as_ref() == b"w:t" {
                    text_depth = text_depth.saturating_sub(1);
                }
                writer.write_event(Event::End(e))
                    .map_err(|e| SeatCardError::DocxRewrite(e.to_string()))?;
            }
            Event::Text(e) if text_depth > 0 => {
                let text = e
                    .unescape()
                    .map_err(|e| SeatCardError::DocxRewrite(format!("文本解码失败: {}", e)))?;
                let replaced = text.replace(placeholder, replacement);
                // BytesText::new 在写出时负责重新转义
                writer.write_event(Event::Text(BytesText::new(&replaced)))
                    .map_err(|e| SeatCardError::DocxRewrite(e.to_string()))?;
            }
            other => writer
                .write_event(other)
                .map_err(|e| SeatCardError::DocxRewrite(e.to_string()))?,
        }

        buf.clear();
    }

    Ok(writer.into_inner())
}
