use crate::errors::ClassroomError;

/// 响应错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    ValidationFailed = 1001,
    FileSizeExceeded = 1002,
    MultifileUploadNotAllowed = 1003,

    Unauthorized = 2000,
    Forbidden = 2001,

    NotFound = 3000,

    InternalServerError = 5000,
    StorageFailed = 5001,
}

impl ErrorCode {
    /// HTTP 状态码
    pub fn http_status(self) -> u16 {
        match self as i32 {
            0 => 200,
            1000..=1999 => 400,
            2000 => 401,
            2001..=2999 => 403,
            3000..=3999 => 404,
            _ => 500,
        }
    }
}

impl From<&ClassroomError> for ErrorCode {
    fn from(err: &ClassroomError) -> Self {
        match err {
            ClassroomError::Validation(_) | ClassroomError::DateParse(_) => {
                ErrorCode::ValidationFailed
            }
            ClassroomError::Authentication(_) => ErrorCode::Unauthorized,
            ClassroomError::Authorization(_) => ErrorCode::Forbidden,
            ClassroomError::NotFound(_) => ErrorCode::NotFound,
            ClassroomError::StorageConnection(_)
            | ClassroomError::StorageBackendNotFound(_)
            | ClassroomError::StorageOperation(_)
            | ClassroomError::FileOperation(_) => ErrorCode::StorageFailed,
            ClassroomError::Serialization(_) => ErrorCode::InternalServerError,
        }
    }
}
