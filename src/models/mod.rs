//! 课堂数据模型
//!
//! 每个实体一个子模块：`entities` 为持久化记录，`requests` 为命令载荷，
//! `responses` 为面向渲染层的视图。

pub mod announcements;
pub mod assignments;
pub mod common;
pub mod dashboards;
pub mod files;
pub mod forum;
pub mod materials;
pub mod quizzes;
pub mod session;
pub mod submissions;

pub use common::error_code::ErrorCode;
pub use common::response::ApiResponse;

/// 带唯一 ID 的持久化记录
pub trait Record {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

/// 为记录类型实现 [`Record`]
#[macro_export]
macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::models::Record for $ty {
                fn id(&self) -> &str {
                    &self.id
                }

                fn set_id(&mut self, id: String) {
                    self.id = id;
                }
            }
        )*
    };
}
