//! 短暂提示消息
//!
//! 获取、创建、复制的结果都以 toast 的形式出现，到期后自动消失

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    expires_at: Instant,
}

/// 按到期时间自动清理的提示队列
#[derive(Debug)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    duration: Duration,
}

impl ToastQueue {
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            duration,
        }
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) {
        self.toasts.push(Toast {
            message: message.into(),
            kind,
            expires_at: now + self.duration,
        });
    }

    /// 清理过期提示，有变化时返回 `true`
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.expires_at > now);
        before != self.toasts.len()
    }

    /// 最新的一条
    pub fn current(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
