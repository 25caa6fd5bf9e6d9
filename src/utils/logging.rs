//! 日志宏：开启 `logging` 特性时转发到 tracing，关闭时编译为空操作
//! 仅用于语句位置

macro_rules! grammar_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        {
            tracing::debug!($($arg)*);
        }
        #[cfg(not(feature = "logging"))]
        {
            let _ = format_args!($($arg)*);
        }
    };
}

macro_rules! grammar_warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        {
            tracing::warn!($($arg)*);
        }
        #[cfg(not(feature = "logging"))]
        {
            let _ = format_args!($($arg)*);
        }
    };
}

pub(crate) use grammar_debug;
pub(crate) use grammar_warn;
