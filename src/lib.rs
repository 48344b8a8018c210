/// 内部实现模块
mod internal;


/// 导出核心入口函数
pub use internal::entrance::download::*;

/// 分片下载器：类型、错误与构建器（以 lib 为中心，此处统一导出）
pub mod downloader {
    use crate::internal;
    pub use internal::downloader::structs::*;

    /// 下载事件钩子：trait 与内置实现
    pub mod hooks {
        use crate::internal;
        pub use internal::downloader::structs::channel_hook::ChannelHook;
        pub use internal::downloader::structs::tracing_hook::TracingHook;
        pub use internal::downloader::traits::download_hook::*;
    }
}

pub mod utils {
    use crate::internal;
    pub use internal::utils::filename::*;
}
