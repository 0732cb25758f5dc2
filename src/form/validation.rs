//! 表单输入校验与请求构建
//!
//! 只有通过校验的输入才会变成 `CreateLinkRequest`，非法请求不会到达网络层。

use std::collections::BTreeMap;

use crate::models::CreateLinkRequest;
use crate::utils::TimeParser;
use crate::utils::url_validator::{validate_url, validation_error_message};

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FormField {
    #[default]
    Url,
    CustomCode,
    ExpiresIn,
}

impl FormField {
    const ALL: [Self; 3] = [Self::Url, Self::CustomCode, Self::ExpiresIn];

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// 获取字段显示标题
    pub fn display_title(&self) -> &'static str {
        match self {
            Self::Url => "Destination URL",
            Self::CustomCode => "Custom Code (optional)",
            Self::ExpiresIn => "Expires In (hours or 2d, 1w)",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Url => "https://example.com/very/long/path",
            Self::CustomCode => "my-link",
            Self::ExpiresIn => "24",
        }
    }
}

/// 字段级校验错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidUrl(String),
    InvalidExpiration(String),
}

impl ValidationError {
    pub fn field(&self) -> FormField {
        match self {
            Self::InvalidUrl(_) => FormField::Url,
            Self::InvalidExpiration(_) => FormField::ExpiresIn,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::InvalidUrl(msg) | Self::InvalidExpiration(msg) => msg,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// 按字段收集的校验错误
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<FormField, ValidationError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, error: ValidationError) {
        self.errors.insert(error.field(), error);
    }

    pub fn get(&self, field: FormField) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.values()
    }

    /// 合并为一行，用于 CLI 输出
    pub fn summary(&self) -> String {
        self.iter()
            .map(|e| format!("{}: {}", e.field().display_title(), e))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// 校验原始输入并构建创建请求
///
/// - `url` 必填，需为带 scheme 与 host 的绝对 URL，空值同样视为 `InvalidUrl`
/// - `custom_code` 去除空白后为空则视为未填写
/// - `expires_in` 为空表示永不过期；否则为正的小时数或 `2d`、`1w` 这类相对时间
pub fn build_request(
    url: &str,
    custom_code: &str,
    expires_in: &str,
) -> Result<CreateLinkRequest, FieldErrors> {
    let mut errors = FieldErrors::new();

    let url = match validate_url(url) {
        Ok(_) => Some(url.trim().to_string()),
        Err(e) => {
            errors.insert(ValidationError::InvalidUrl(
                validation_error_message(&e).to_string(),
            ));
            None
        }
    };

    let expires_in = expires_in.trim();
    let expires_in_hours = if expires_in.is_empty() {
        None
    } else {
        match TimeParser::parse_expires_in_hours(expires_in) {
            Ok(hours) => Some(hours),
            Err(e) => {
                errors.insert(ValidationError::InvalidExpiration(e));
                None
            }
        }
    };

    let custom_code = custom_code.trim();
    let custom_code = (!custom_code.is_empty()).then(|| custom_code.to_string());

    match url {
        Some(url) if errors.is_empty() => Ok(CreateLinkRequest {
            url,
            custom_code,
            expires_in_hours,
        }),
        _ => Err(errors),
    }
}
