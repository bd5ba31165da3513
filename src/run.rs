//! 打印流程编排：试打 → 人工确认 → 批量打印
//!
//! 流程是一条直线，唯一的分支点是试打后的人工确认。
//! 打印动作和确认动作以闭包注入，便于单独测试流程本身。

use crate::error::{Result, SeatCardError};
use crate::matcher::PrintJob;

/// 一次运行的终态
#[derive(Debug, PartialEq)]
pub enum RunOutcome {
    /// 批量打印完成（printed 含试打那张）
    Done { printed: usize, failed: usize },
    /// 操作者在确认环节取消，只打了试打那张
    Cancelled { printed: usize },
}

/// 确认输入判定：只有 y / Y 继续，其余一律取消
pub fn is_confirmed(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

/// 执行完整打印序列。
///
/// 第一张单独试打，失败立即中止（此时还没有任何批量承诺）；
/// 确认通过后打印剩余任务，单个任务失败只记录并继续。
pub fn run_print_sequence(
    jobs: &[PrintJob],
    mut print: impl FnMut(&PrintJob) -> bool,
    confirm: impl FnOnce() -> Result<bool>,
) -> Result<RunOutcome> {
    let first = match jobs.first() {
        Some(job) => job,
        None => return Err(SeatCardError::NoJobs),
    };

    println!("\n===================================");
    println!("🧪 试打第1位：{}", first.name);
    println!("   匹配模板：{}", first.template.display());
    println!("===================================");

    if !print(first) {
        return Err(SeatCardError::TrialPrintFailed);
    }

    println!("\n{}", "=".repeat(50));
    println!("请检查打印机输出结果。");
    println!("{}", "=".repeat(50));

    if !confirm()? {
        println!("\n🛑 已取消打印。");
        return Ok(RunOutcome::Cancelled { printed: 1 });
    }

    println!("\n🚀 开始批量打印剩余名单...");

    let remaining = &jobs[1..];
    let mut printed = 1;
    let mut failed = 0;

    for (index, job) in remaining.iter().enumerate() {
        print!("[{}/{}] ", index + 1, remaining.len());
        if print(job) {
            printed += 1;
        } else {
            failed += 1;
        }
    }

    println!("\n✅ 所有任务已完成！");
    Ok(RunOutcome::Done { printed, failed })
}
