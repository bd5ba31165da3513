use clap::Parser;
use dialoguer::Input;
use seatcard_print::{cli, config, error, matcher, printer, roster, run};

use cli::{Cli, Commands};
use config::AppConfig;
use error::{Result, SeatCardError};
use std::collections::BTreeSet;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Print { excel, templates_dir } => {
            println!("--- 自动化席卡打印系统 (Excel版) ---\n");

            let mut config = config;
            if let Some(path) = excel {
                config.excel.filename = path;
            }

            // 1. 从 Excel 获取名单
            println!("[1/3] 读取名单...");
            let names = roster::read_names(&config.excel);
            if names.is_empty() {
                println!("程序终止：名单为空或读取失败。");
                return Err(SeatCardError::EmptyRoster);
            }

            // 2. 自动匹配模板
            println!("\n[2/3] 正在匹配模板...");
            let jobs = matcher::build_jobs(&names, &config.templates);
            if jobs.is_empty() {
                println!("❌ 没有有效的打印任务。");
                return Err(SeatCardError::NoJobs);
            }
            println!("✅ 生成 {} 个打印任务。", jobs.len());

            // 3. 试打 → 确认 → 批量打印
            println!("\n[3/3] 启动打印引擎...");
            let mut engine =
                printer::PrintEngine::start(&templates_dir, config.spool_delay_secs)?;

            let outcome = run::run_print_sequence(
                &jobs,
                |job| engine.print_job(job),
                || {
                    let input: String = Input::new()
                        .with_prompt(">>> 确认无误继续打印剩余名单？(输入 y 继续，其他键退出)")
                        .allow_empty(true)
                        .interact_text()
                        .map_err(|e| SeatCardError::Prompt(e.to_string()))?;
                    Ok(run::is_confirmed(&input))
                },
            )?;

            if let run::RunOutcome::Done { printed, failed } = outcome {
                println!("共打印 {} 张，失败 {} 张。", printed, failed);
            }
        }

        Commands::Check { excel, templates_dir } => {
            println!("🔍 席卡打印预检\n");

            let mut config = config;
            if let Some(path) = excel {
                config.excel.filename = path;
            }

            let names = roster::read_names(&config.excel);
            if names.is_empty() {
                return Err(SeatCardError::EmptyRoster);
            }

            println!("\n正在匹配模板...");
            let jobs = matcher::build_jobs(&names, &config.templates);
            println!("✅ 匹配 {} / {} 个名字。\n", jobs.len(), names.len());

            for job in &jobs {
                println!(
                    "  {} ({}字) → {}  占位符 '{}'",
                    job.name,
                    job.char_count,
                    job.template.display(),
                    job.placeholder
                );
            }

            // 每个用到的模板文件检查一次
            let used: BTreeSet<_> = jobs.iter().map(|j| j.template.clone()).collect();
            println!("\n模板文件检查（目录 {}）:", templates_dir.display());
            let mut missing = 0;
            for template in used {
                let path = templates_dir.join(&template);
                if path.exists() {
                    println!("  ✔ {}", template.display());
                } else {
                    println!("  ❌ {} 不存在", template.display());
                    missing += 1;
                }
            }

            if missing == 0 {
                println!("\n✅ 预检通过，可以开始打印。");
            } else {
                println!("\n⚠️  有 {} 个模板文件缺失，打印前请补齐。", missing);
            }
        }

        Commands::Config { show, init } => {
            if let Some(path) = init {
                AppConfig::write_default(&path)?;
                println!("✔ 默认配置已写入: {}", path.display());
            }

            if show {
                println!("当前生效配置:");
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}
