//! 工具模块：日志宏
pub mod logging;
