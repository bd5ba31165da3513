use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeatCardError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("读取 Excel 失败: {0}")]
    ExcelRead(String),

    #[error("找不到模板文件: {0}")]
    TemplateNotFound(String),

    #[error("docx 改写失败: {0}")]
    DocxRewrite(String),

    #[error("打印任务提交失败: {0}")]
    PrintSpool(String),

    #[error("交互输入错误: {0}")]
    Prompt(String),

    #[error("名单为空或读取失败")]
    EmptyRoster,

    #[error("没有有效的打印任务")]
    NoJobs,

    #[error("试打失败，批量打印已中止")]
    TrialPrintFailed,

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 解析错误: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SeatCardError>;
