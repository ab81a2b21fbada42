//! Virtual Classroom - 本地课堂数据与状态服务
//!
//! 基于 Actix Web 的单会话课堂后端：作业、资料、测验、公告、论坛与提交，
//! 全部以键值记录持久化。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 命令分派与视图构建
//! - `storage`: 键值存储后端（文件/内存/Redis）与存储适配器
//! - `store`: 课堂快照与引用完整性
//! - `utils`: 工具函数

pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod store;
pub mod utils;
