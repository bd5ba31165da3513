//! 打印引擎：填充模板 → 送默认打印机 → 缓冲 → 丢弃临时文件
//!
//! 引擎在整个运行期间只创建一次，所有任务顺序复用同一个引擎；
//! 运行结束时随作用域释放（临时目录随 Drop 清理），成功失败都一样。

use crate::docx;
use crate::error::{Result, SeatCardError};
use crate::matcher::PrintJob;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;
use tempfile::TempDir;

pub struct PrintEngine {
    /// 模板文件所在目录
    templates_dir: PathBuf,
    /// 每次送打后的缓冲时间，防止打印队列拥堵
    spool_delay: Duration,
    /// 填充结果的中转目录，引擎释放时整体删除
    scratch: TempDir,
    /// 已送打的任务数，用于生成互不冲突的中转文件名
    submitted: usize,
}

impl PrintEngine {
    pub fn start(templates_dir: &Path, spool_delay_secs: u64) -> Result<Self> {
        Ok(Self {
            templates_dir: templates_dir.to_path_buf(),
            spool_delay: Duration::from_secs(spool_delay_secs),
            scratch: TempDir::new()?,
            submitted: 0,
        })
    }

    /// 执行单个任务：替换并打印。
    ///
    /// 成功返回 true；任何一步失败打一条错误信息并返回 false，
    /// 不向调用方抛错。中转文件无论成败都会尽力删除。
    pub fn print_job(&mut self, job: &PrintJob) -> bool {
        let template_path = self.templates_dir.join(&job.template);
        let template_path = match template_path.canonicalize() {
            Ok(p) => p,
            Err(_) => {
                println!("❌ 错误：找不到模板文件 {}", template_path.display());
                return false;
            }
        };

        match self.fill_and_submit(&template_path, job) {
            Ok(()) => true,
            Err(e) => {
                println!("❌ 打印处理错误: {}", e);
                false
            }
        }
    }

    fn fill_and_submit(&mut self, template_path: &Path, job: &PrintJob) -> Result<()> {
        let template = std::fs::read(template_path)?;
        let filled = docx::replace_placeholder(&template, &job.placeholder, &job.name)?;

        self.submitted += 1;
        let spool_path = self
            .scratch
            .path()
            .join(format!("席卡_{:04}.docx", self.submitted));
        std::fs::write(&spool_path, &filled)?;

        println!("🖨️  正在发送打印任务: {}", job.name);
        let result = submit_to_printer(&spool_path);

        if result.is_ok() {
            std::thread::sleep(self.spool_delay);
        }

        // 两段式收尾：清理失败只记录，不覆盖打印本身的结果
        if let Err(e) = std::fs::remove_file(&spool_path) {
            println!("⚠️  临时文件清理失败: {}", e);
        }

        result
    }
}

/// 把文档提交给操作系统当前的默认打印机
#[cfg(not(windows))]
fn submit_to_printer(path: &Path) -> Result<()> {
    let status = Command::new("lp")
        .arg(path)
        .status()
        .map_err(|e| SeatCardError::PrintSpool(format!("无法启动 lp: {}", e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(SeatCardError::PrintSpool(format!("lp 退出码 {}", status)))
    }
}

#[cfg(windows)]
fn submit_to_printer(path: &Path) -> Result<()> {
    let script = format!(
        "Start-Process -FilePath '{}' -Verb Print",
        path.display()
    );
    let status = Command::new("powershell")
        .args(["-NoProfile", "-Command", &script])
        .status()
        .map_err(|e| SeatCardError::PrintSpool(format!("无法启动 powershell: {}", e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(SeatCardError::PrintSpool(format!(
            "powershell 退出码 {}",
            status
        )))
    }
}
