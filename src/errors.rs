use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum LinkshortError {
    Validation(String),
    FetchFailed(String),
    CreationFailed(String),
    ClipboardFailed(String),
    Config(String),
    Serialization(String),
    Terminal(String),
}

impl LinkshortError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LinkshortError::Validation(_) => "E001",
            LinkshortError::FetchFailed(_) => "E002",
            LinkshortError::CreationFailed(_) => "E003",
            LinkshortError::ClipboardFailed(_) => "E004",
            LinkshortError::Config(_) => "E005",
            LinkshortError::Serialization(_) => "E006",
            LinkshortError::Terminal(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LinkshortError::Validation(_) => "Validation Error",
            LinkshortError::FetchFailed(_) => "Fetch Failed",
            LinkshortError::CreationFailed(_) => "Creation Failed",
            LinkshortError::ClipboardFailed(_) => "Clipboard Error",
            LinkshortError::Config(_) => "Configuration Error",
            LinkshortError::Serialization(_) => "Serialization Error",
            LinkshortError::Terminal(_) => "Terminal Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LinkshortError::Validation(msg) => msg,
            LinkshortError::FetchFailed(msg) => msg,
            LinkshortError::CreationFailed(msg) => msg,
            LinkshortError::ClipboardFailed(msg) => msg,
            LinkshortError::Config(msg) => msg,
            LinkshortError::Serialization(msg) => msg,
            LinkshortError::Terminal(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 提示）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LinkshortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinkshortError {}

// 便捷的构造函数
impl LinkshortError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinkshortError::Validation(msg.into())
    }

    pub fn fetch_failed<T: Into<String>>(msg: T) -> Self {
        LinkshortError::FetchFailed(msg.into())
    }

    pub fn creation_failed<T: Into<String>>(msg: T) -> Self {
        LinkshortError::CreationFailed(msg.into())
    }

    pub fn clipboard_failed<T: Into<String>>(msg: T) -> Self {
        LinkshortError::ClipboardFailed(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        LinkshortError::Config(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinkshortError::Serialization(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        LinkshortError::Terminal(msg.into())
    }
}

impl From<std::io::Error> for LinkshortError {
    fn from(err: std::io::Error) -> Self {
        LinkshortError::Terminal(err.to_string())
    }
}

impl From<serde_json::Error> for LinkshortError {
    fn from(err: serde_json::Error) -> Self {
        LinkshortError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for LinkshortError {
    fn from(err: config::ConfigError) -> Self {
        LinkshortError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for LinkshortError {
    fn from(err: toml::ser::Error) -> Self {
        LinkshortError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkshortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            LinkshortError::validation("a"),
            LinkshortError::fetch_failed("a"),
            LinkshortError::creation_failed("a"),
            LinkshortError::clipboard_failed("a"),
            LinkshortError::config("a"),
            LinkshortError::serialization("a"),
            LinkshortError::terminal("a"),
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_format_simple() {
        let err = LinkshortError::fetch_failed("GET /api/links returned 500");
        assert_eq!(
            err.format_simple(),
            "Fetch Failed: GET /api/links returned 500"
        );
        assert_eq!(err.to_string(), err.format_simple());
    }

    #[test]
    fn test_format_colored_contains_code() {
        let err = LinkshortError::clipboard_failed("no display");
        let s = err.format_colored();
        assert!(s.contains("E004"), "got: {}", s);
        assert!(s.contains("no display"), "got: {}", s);
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: LinkshortError = parse.unwrap_err().into();
        assert!(matches!(err, LinkshortError::Serialization(_)));
    }
}
