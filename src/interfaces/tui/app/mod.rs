//! TUI application state
//!
//! - `state`: App 结构与标签页/屏幕枚举
//! - `navigation`: 光标移动、标签切换、统计范围
//! - `link_operations`: 数据同步、创建链接、复制
//! - `toast`: 短暂提示

mod link_operations;
mod navigation;
mod state;
mod toast;

pub use state::{AnalyticsTab, App, CurrentScreen, Tab};
pub use toast::{Toast, ToastKind, ToastQueue};
