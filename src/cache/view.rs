//! 视图状态：Loading / Error / Empty / Ready 互斥

use std::sync::Arc;

use super::store::Snapshot;
use crate::models::{AnalyticsData, Link};

/// 判断值是否应显示为空状态
pub trait IsEmpty {
    fn is_empty_value(&self) -> bool;
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for Link {
    fn is_empty_value(&self) -> bool {
        false
    }
}

/// `null` 或没有任何点击记录
impl IsEmpty for Option<AnalyticsData> {
    fn is_empty_value(&self) -> bool {
        self.as_ref().is_none_or(AnalyticsData::has_no_records)
    }
}

#[derive(Debug)]
pub enum ViewState<T> {
    Loading,
    /// 请求失败；`stale` 为失败前的旧值，不能当作最新数据展示
    Error {
        message: String,
        stale: Option<Arc<T>>,
    },
    Empty {
        validating: bool,
    },
    Ready {
        value: Arc<T>,
        validating: bool,
    },
}

impl<T> Clone for ViewState<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Loading => Self::Loading,
            Self::Error { message, stale } => Self::Error {
                message: message.clone(),
                stale: stale.clone(),
            },
            Self::Empty { validating } => Self::Empty {
                validating: *validating,
            },
            Self::Ready { value, validating } => Self::Ready {
                value: Arc::clone(value),
                validating: *validating,
            },
        }
    }
}

impl<T: IsEmpty> ViewState<T> {
    /// 错误优先，其次是无值（Loading），再区分空与有数据
    pub fn from_snapshot(snapshot: &Snapshot<T>) -> Self {
        if let Some(error) = &snapshot.error {
            return Self::Error {
                message: error.message().to_string(),
                stale: snapshot.value.clone(),
            };
        }
        match &snapshot.value {
            None => Self::Loading,
            Some(value) if value.is_empty_value() => Self::Empty {
                validating: snapshot.validating,
            },
            Some(value) => Self::Ready {
                value: Arc::clone(value),
                validating: snapshot.validating,
            },
        }
    }
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    pub fn value(&self) -> Option<&Arc<T>> {
        match self {
            Self::Ready { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn is_validating(&self) -> bool {
        matches!(
            self,
            Self::Empty { validating: true } | Self::Ready { validating: true, .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LinkshortError;

    fn snapshot<T>(value: Option<T>, error: Option<&str>) -> Snapshot<T> {
        Snapshot {
            value: value.map(Arc::new),
            error: error.map(LinkshortError::fetch_failed),
            validating: false,
        }
    }

    #[test]
    fn test_no_value_is_loading() {
        let state = ViewState::<Vec<Link>>::from_snapshot(&snapshot(None, None));
        assert!(state.is_loading());
    }

    #[test]
    fn test_empty_list_is_empty_not_error() {
        let state = ViewState::from_snapshot(&snapshot(Some(Vec::<Link>::new()), None));
        assert!(state.is_empty());
        assert!(!state.is_error());
    }

    #[test]
    fn test_error_carries_stale_value() {
        let state = ViewState::from_snapshot(&snapshot(Some(vec![1u8, 2]), Some("offline")));
        match state {
            ViewState::Error { message, stale } => {
                assert_eq!(message, "offline");
                assert_eq!(stale.as_deref(), Some(&vec![1u8, 2]));
            }
            other => panic!("expected error state, got {:?}", other),
        }
    }

    #[test]
    fn test_null_and_zero_analytics_are_empty() {
        let null = ViewState::from_snapshot(&snapshot(Some(None::<AnalyticsData>), None));
        assert!(null.is_empty());

        let zero = ViewState::from_snapshot(&snapshot(Some(Some(AnalyticsData::default())), None));
        assert!(zero.is_empty());

        let data = AnalyticsData {
            total_clicks: 3,
            ..Default::default()
        };
        let ready = ViewState::from_snapshot(&snapshot(Some(Some(data)), None));
        assert!(ready.value().is_some());
    }
}
