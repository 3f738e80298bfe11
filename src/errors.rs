use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    DuplicateId(String),
    NotFound(String),
    Config(String),
    FileOperation(String),
    Serialization(String),
    Logging(String),
}

impl SignalError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            SignalError::DuplicateId(_) => "S001",
            SignalError::NotFound(_) => "S002",
            SignalError::Config(_) => "S003",
            SignalError::FileOperation(_) => "S004",
            SignalError::Serialization(_) => "S005",
            SignalError::Logging(_) => "S006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            SignalError::DuplicateId(_) => "Duplicate Signal Id",
            SignalError::NotFound(_) => "Signal Not Found",
            SignalError::Config(_) => "Configuration Error",
            SignalError::FileOperation(_) => "File Operation Error",
            SignalError::Serialization(_) => "Serialization Error",
            SignalError::Logging(_) => "Logging Setup Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            SignalError::DuplicateId(msg) => msg,
            SignalError::NotFound(msg) => msg,
            SignalError::Config(msg) => msg,
            SignalError::FileOperation(msg) => msg,
            SignalError::Serialization(msg) => msg,
            SignalError::Logging(msg) => msg,
        }
    }

    /// 格式化为彩色输出
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

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, SignalError::NotFound(_))
    }

    pub fn is_duplicate_id(&self) -> bool {
        matches!(self, SignalError::DuplicateId(_))
    }
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SignalError {}

// 便捷的构造函数
impl SignalError {
    pub fn duplicate_id<T: AsRef<str>>(id: T) -> Self {
        SignalError::DuplicateId(format!("Traffic light {} already exists.", id.as_ref()))
    }

    pub fn not_found<T: AsRef<str>>(id: T) -> Self {
        SignalError::NotFound(format!("Traffic light {} not found.", id.as_ref()))
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        SignalError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        SignalError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        SignalError::Serialization(msg.into())
    }

    pub fn logging<T: Into<String>>(msg: T) -> Self {
        SignalError::Logging(msg.into())
    }
}

impl From<std::io::Error> for SignalError {
    fn from(err: std::io::Error) -> Self {
        SignalError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SignalError {
    fn from(err: serde_json::Error) -> Self {
        SignalError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for SignalError {
    fn from(err: toml::ser::Error) -> Self {
        SignalError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for SignalError {
    fn from(err: config::ConfigError) -> Self {
        SignalError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SignalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            SignalError::duplicate_id("a"),
            SignalError::not_found("a"),
            SignalError::config("x"),
            SignalError::file_operation("x"),
            SignalError::serialization("x"),
            SignalError::logging("x"),
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_format_simple_includes_type_and_message() {
        let err = SignalError::not_found("TL9");
        assert_eq!(
            err.format_simple(),
            "Signal Not Found: Traffic light TL9 not found."
        );
    }
}
