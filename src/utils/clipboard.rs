//! 剪贴板写入
//!
//! 所有路径都返回 `Result`，调用方负责把失败转换为提示信息。
//!
//! X11/Wayland 下剪贴板内容由写入方进程提供，句柄释放后内容随之消失。
//! 因此 TUI 持有一个长期存在的 `SystemClipboard`，CLI 在退出前用
//! `SystemClipboard::holding` 保持一段时间的所有权。

use std::time::Duration;

use crate::errors::{LinkshortError, Result};

pub trait Clipboard {
    fn copy_text(&mut self, text: &str) -> Result<()>;
}

/// 系统剪贴板（arboard），首次复制时才打开
#[derive(Default)]
pub struct SystemClipboard {
    #[cfg(feature = "clipboard")]
    inner: Option<arboard::Clipboard>,
    hold: Option<Duration>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入后在 Linux 上最多阻塞 `hold`，直到剪贴板管理器或其他程序接管内容
    pub fn holding(hold: Duration) -> Self {
        Self {
            hold: Some(hold),
            ..Self::default()
        }
    }

    pub fn hold(&self) -> Option<Duration> {
        self.hold
    }

    /// 复制成功后给用户的提示
    pub fn copied_message(&self) -> String {
        match self.hold {
            Some(hold) if cfg!(target_os = "linux") => format!(
                "Copied to clipboard (held for up to {}s unless a clipboard manager takes it)",
                hold.as_secs()
            ),
            _ => "Copied to clipboard".to_string(),
        }
    }
}

impl Clipboard for SystemClipboard {
    #[cfg(feature = "clipboard")]
    fn copy_text(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().map_err(|e| {
                LinkshortError::clipboard_failed(format!("Clipboard unavailable: {}", e))
            })?,
        };
        let clipboard = self.inner.insert(clipboard);

        #[cfg(target_os = "linux")]
        {
            if let Some(hold) = self.hold {
                use arboard::SetExtLinux;
                return clipboard
                    .set()
                    .wait_until(std::time::Instant::now() + hold)
                    .text(text)
                    .map_err(|e| LinkshortError::clipboard_failed(format!("Failed to copy: {}", e)));
            }
        }

        clipboard
            .set_text(text)
            .map_err(|e| LinkshortError::clipboard_failed(format!("Failed to copy: {}", e)))
    }

    #[cfg(not(feature = "clipboard"))]
    fn copy_text(&mut self, _text: &str) -> Result<()> {
        Err(LinkshortError::clipboard_failed(
            "Clipboard support is not compiled in (enable the `clipboard` feature)",
        ))
    }
}
