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
macro_rules! define_classroom_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum ClassroomError {
            $($variant(String),)*
        }

        impl ClassroomError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ClassroomError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ClassroomError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ClassroomError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ClassroomError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ClassroomError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_classroom_errors! {
    StorageConnection("E001", "Storage Connection Error"),
    StorageBackendNotFound("E002", "Storage Backend Not Found"),
    StorageOperation("E003", "Storage Operation Error"),
    FileOperation("E004", "File Operation Error"),
    Serialization("E005", "Serialization Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    DateParse("E008", "Date Parse Error"),
    Authentication("E009", "Authentication Error"),
    Authorization("E010", "Authorization Error"),
}

impl ClassroomError {
    /// 是否为面向用户的提示（校验、权限、资源不存在）
    pub fn is_user_notice(&self) -> bool {
        matches!(
            self,
            ClassroomError::Validation(_)
                | ClassroomError::NotFound(_)
                | ClassroomError::DateParse(_)
                | ClassroomError::Authentication(_)
                | ClassroomError::Authorization(_)
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ClassroomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ClassroomError {}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for ClassroomError {
    fn from(err: std::io::Error) -> Self {
        ClassroomError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ClassroomError {
    fn from(err: serde_json::Error) -> Self {
        ClassroomError::Serialization(err.to_string())
    }
}

impl From<redis::RedisError> for ClassroomError {
    fn from(err: redis::RedisError) -> Self {
        ClassroomError::StorageOperation(err.to_string())
    }
}

impl From<chrono::ParseError> for ClassroomError {
    fn from(err: chrono::ParseError) -> Self {
        ClassroomError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClassroomError>;
