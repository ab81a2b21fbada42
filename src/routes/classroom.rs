use actix_multipart::Multipart;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Result as ActixResult, middleware, web};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;

use crate::config::UploadConfig;
use crate::errors::ClassroomError;
use crate::models::files::responses::FileUploadResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{ClassroomService, Command};
use crate::utils::file_reader::{UploadedFile, embed_upload};

/// 领域错误 -> 带状态码的提示响应
fn notice(err: &ClassroomError) -> HttpResponse {
    let status = StatusCode::from_u16(ErrorCode::from(err).http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(ApiResponse::from_error(err))
}

// 执行命令
pub async fn dispatch_command(
    service: web::Data<ClassroomService>,
    body: web::Json<Command>,
) -> ActixResult<HttpResponse> {
    match service.dispatch(body.into_inner()).await {
        Ok(outcome) => {
            let message = outcome.message.clone();
            Ok(HttpResponse::Ok().json(ApiResponse::success(outcome, message)))
        }
        Err(e) => Ok(notice(&e)),
    }
}

// 当前身份
pub async fn get_session(service: web::Data<ClassroomService>) -> ActixResult<HttpResponse> {
    let identity = service.session().await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(identity, "OK")))
}

// 按角色的视图
pub async fn get_dashboard(service: web::Data<ClassroomService>) -> ActixResult<HttpResponse> {
    match service.dashboard().await {
        Ok(dashboard) => Ok(HttpResponse::Ok().json(ApiResponse::success(dashboard, "OK"))),
        Err(e) => Ok(notice(&e)),
    }
}

/// 读取上传文件并编码为 data URL，不落盘
pub async fn upload_file(
    upload: web::Data<UploadConfig>,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let mut uploaded: Option<UploadedFile> = None;

    while let Some(mut field) = payload.try_next().await? {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();
        if name != "file" {
            continue;
        }

        if uploaded.is_some() {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::MultifileUploadNotAllowed,
                "Only one file can be uploaded at a time",
            )));
        }

        let file_name = content_disposition
            .and_then(|cd| cd.get_filename())
            .map(|s| s.to_string())
            .unwrap_or_default();
        let content_type = field.content_type().map(|ct| ct.to_string());

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let data = chunk?;
            // 超限即停止读取
            if bytes.len() + data.len() > upload.max_size {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::FileSizeExceeded,
                    "File size exceeds the limit",
                )));
            }
            bytes.extend_from_slice(&data);
        }

        uploaded = Some(UploadedFile {
            file_name,
            content_type,
            bytes,
        });
    }

    let size = uploaded.as_ref().map_or(0, |f| f.bytes.len() as i64);
    let content_type = uploaded
        .as_ref()
        .map(UploadedFile::mime_type)
        .unwrap_or_default();

    match embed_upload(uploaded, &upload) {
        Ok(file) => {
            let message = if file.is_some() {
                "File read successfully"
            } else {
                "No file supplied"
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                FileUploadResponse {
                    file,
                    size,
                    content_type,
                },
                message,
            )))
        }
        Err(e) => Ok(notice(&e)),
    }
}

// 配置路由
pub fn configure_classroom_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/commands", web::post().to(dispatch_command))
            .route("/session", web::get().to(get_session))
            .route("/dashboard", web::get().to(get_dashboard))
            .service(
                web::resource("/files")
                    .wrap(middleware::Compress::default())
                    .route(web::post().to(upload_file)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageAdapter;
    use crate::storage::backends::memory::MemoryStorage;
    use crate::store::EntityStore;
    use crate::utils::json_error_handler;
    use actix_web::{App, test};
    use serde_json::{Value, json};
    use std::sync::Arc;

    async fn service() -> ClassroomService {
        let adapter = StorageAdapter::new(Arc::new(MemoryStorage::new()), "vc_");
        ClassroomService::new(EntityStore::open(adapter).await.unwrap())
    }

    macro_rules! app {
        ($service:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                    .app_data(web::Data::new($service))
                    .app_data(web::Data::new(UploadConfig::default()))
                    .configure(configure_classroom_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_command_flow_and_status_codes() {
        let app = app!(service().await);

        let req = test::TestRequest::get().uri("/api/dashboard").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::post()
            .uri("/api/commands")
            .set_json(json!({"action": "login", "name": "Bob", "role": "student"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["code"], 0);
        assert_eq!(body["message"], "Welcome, Bob");

        let req = test::TestRequest::post()
            .uri("/api/commands")
            .set_json(json!({"action": "create-announcement", "title": "x", "text": "y"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::post()
            .uri("/api/commands")
            .set_json(json!({"action": "post-forum", "message": "   "}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/commands")
            .set_json(json!({"action": "delete-quiz", "id": "missing"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::get().uri("/api/session").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["name"], "Bob");

        let req = test::TestRequest::get().uri("/api/dashboard").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["role"], "student");
        assert!(body["data"]["grades"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_unknown_action_is_bad_request() {
        let app = app!(service().await);
        let req = test::TestRequest::post()
            .uri("/api/commands")
            .set_json(json!({"action": "drop-everything"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], ErrorCode::BadRequest as i32);
    }

    #[actix_web::test]
    async fn test_not_found_maps_to_404() {
        let app = app!(service().await);
        let req = test::TestRequest::post()
            .uri("/api/commands")
            .set_json(json!({"action": "login", "name": "Alice", "role": "teacher"}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/commands")
            .set_json(json!({"action": "delete-assignment", "id": "nope"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    fn multipart_body(file_name: &str, content_type: &str, content: &[u8]) -> (String, Vec<u8>) {
        let boundary = "----classroom-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
        (format!("multipart/form-data; boundary={boundary}"), body)
    }

    #[actix_web::test]
    async fn test_upload_embeds_file() {
        let app = app!(service().await);
        let (content_type, body) = multipart_body("hw1.pdf", "application/pdf", b"%PDF-1.4 test");
        let req = test::TestRequest::post()
            .uri("/api/files")
            .insert_header(("content-type", content_type))
            .set_payload(body)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["code"], 0);
        assert_eq!(body["data"]["file"]["fileName"], "hw1.pdf");
        assert!(
            body["data"]["file"]["fileData"]
                .as_str()
                .unwrap()
                .starts_with("data:application/pdf;base64,")
        );
    }

    #[actix_web::test]
    async fn test_upload_rejects_disallowed_type() {
        let app = app!(service().await);
        let (content_type, body) = multipart_body("run.exe", "application/octet-stream", b"MZ");
        let req = test::TestRequest::post()
            .uri("/api/files")
            .insert_header(("content-type", content_type))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], ErrorCode::ValidationFailed as i32);
        assert_eq!(body["message"], "File type not allowed");
    }
}
