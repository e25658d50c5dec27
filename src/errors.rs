//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_records_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum RecordsError {
            $($variant(String),)*
        }

        impl RecordsError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(RecordsError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(RecordsError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(RecordsError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl RecordsError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        RecordsError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_records_errors! {
    Network("E001", "Network Error"),
    Api("E002", "API Error"),
    Validation("E003", "Validation Error"),
    Serialization("E004", "Serialization Error"),
    Export("E005", "Export Error"),
    FileOperation("E006", "File Operation Error"),
    Configuration("E007", "Configuration Error"),
    NotFound("E008", "Resource Not Found"),
    StorePluginNotFound("E009", "Store Plugin Not Found"),
}

impl RecordsError {
    /// 由非 2xx 响应构造 API 错误，响应体原样保留
    pub fn from_status(status: u16, status_text: &str, body: &str) -> Self {
        RecordsError::Api(format!("{status} {status_text} - {body}"))
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for RecordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for RecordsError {}

// 为常见的错误类型实现 From trait
impl From<reqwest::Error> for RecordsError {
    fn from(err: reqwest::Error) -> Self {
        RecordsError::Network(err.to_string())
    }
}

impl From<std::io::Error> for RecordsError {
    fn from(err: std::io::Error) -> Self {
        RecordsError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for RecordsError {
    fn from(err: serde_json::Error) -> Self {
        RecordsError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for RecordsError {
    fn from(err: config::ConfigError) -> Self {
        RecordsError::Configuration(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for RecordsError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        RecordsError::Export(format!("XLSX: {err}"))
    }
}

impl From<csv::Error> for RecordsError {
    fn from(err: csv::Error) -> Self {
        RecordsError::Export(format!("CSV: {err}"))
    }
}

impl From<lopdf::Error> for RecordsError {
    fn from(err: lopdf::Error) -> Self {
        RecordsError::Export(format!("PDF: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, RecordsError>;
