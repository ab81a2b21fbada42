use actix_web::{HttpRequest, HttpResponse, error};
use tracing::warn;

use crate::models::{ApiResponse, ErrorCode};

/// JSON 请求体解析失败（含未知命令标签）时返回统一的 400 响应
pub fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid request body: {err}");
    warn!("{} {}: {}", req.method(), req.path(), message);
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message));
    error::InternalError::from_response(err, response).into()
}
