use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seatcard-print")]
#[command(about = "宴会席卡批量打印工具（Excel名单 → Word模板 → 默认打印机）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 配置文件路径（JSON，省略时使用内置默认配置）
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 读取名单并打印：先试打一张，确认后批量打印
    Print {
        /// Excel 名单文件（覆盖配置中的路径）
        #[arg(short, long)]
        excel: Option<PathBuf>,

        /// 模板文件所在目录（默认当前目录）
        #[arg(short, long, default_value = ".")]
        templates_dir: PathBuf,
    },

    /// 预检：读名单、匹配模板、检查模板文件，不打印任何东西
    Check {
        /// Excel 名单文件（覆盖配置中的路径）
        #[arg(short, long)]
        excel: Option<PathBuf>,

        /// 模板文件所在目录（默认当前目录）
        #[arg(short, long, default_value = ".")]
        templates_dir: PathBuf,
    },

    /// 查看或生成配置
    Config {
        /// 显示当前生效的配置
        #[arg(long)]
        show: bool,

        /// 把默认配置写到指定路径
        #[arg(long)]
        init: Option<PathBuf>,
    },
}
