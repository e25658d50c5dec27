//! EduRecords - 学校记录服务的命令行管理台
//!
//! 通过远端 REST 服务管理学生、教师、课程、班级、选课与成绩，并导出课程成绩报表。
//!
//! # 架构
//! - `commands`: 命令行解析与输出
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 启动准备
//! - `services`: 各管理界面的业务逻辑与报表导出
//! - `storage`: 记录服务访问层（HTTP / 内存）
//! - `utils`: 工具函数

pub mod commands;
pub mod config;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
