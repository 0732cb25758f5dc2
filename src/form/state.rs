//! 创建链接表单状态
//!
//! 提交成功后表单重置并保存 "last created" 结果，直到下一次成功提交才被替换；
//! 提交失败时保留用户输入。

use super::validation::{FieldErrors, FormField, build_request};
use crate::errors::LinkshortError;
use crate::models::{CreateLinkRequest, CreateLinkResponse};

#[derive(Debug, Default)]
pub struct LinkForm {
    pub url: String,
    pub custom_code: String,
    pub expires_in: String,
    pub errors: FieldErrors,
    pub editing: FormField,
    /// 请求进行中，防止重复提交
    pub submitting: bool,
    last_created: Option<CreateLinkResponse>,
}

impl LinkForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// 清空输入与错误，不影响 last created
    pub fn clear(&mut self) {
        self.url.clear();
        self.custom_code.clear();
        self.expires_in.clear();
        self.errors.clear();
        self.editing = FormField::default();
    }

    pub fn next_field(&mut self) {
        self.editing = self.editing.next();
    }

    pub fn prev_field(&mut self) {
        self.editing = self.editing.prev();
    }

    pub fn input(&self, field: FormField) -> &str {
        match field {
            FormField::Url => &self.url,
            FormField::CustomCode => &self.custom_code,
            FormField::ExpiresIn => &self.expires_in,
        }
    }

    fn current_input_mut(&mut self) -> &mut String {
        match self.editing {
            FormField::Url => &mut self.url,
            FormField::CustomCode => &mut self.custom_code,
            FormField::ExpiresIn => &mut self.expires_in,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.current_input_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.current_input_mut().pop();
    }

    /// 校验当前输入
    ///
    /// 通过时返回请求并进入 submitting 状态；未通过时记录字段错误并返回 `None`。
    /// 已有请求在进行中时也返回 `None`。
    pub fn prepare_submission(&mut self) -> Option<CreateLinkRequest> {
        if self.submitting {
            return None;
        }
        match build_request(&self.url, &self.custom_code, &self.expires_in) {
            Ok(request) => {
                self.errors.clear();
                self.submitting = true;
                Some(request)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// 处理提交结果
    pub fn complete(&mut self, result: &Result<CreateLinkResponse, LinkshortError>) {
        self.submitting = false;
        if let Ok(response) = result {
            self.clear();
            self.last_created = Some(response.clone());
        }
    }

    pub fn last_created(&self) -> Option<&CreateLinkResponse> {
        self.last_created.as_ref()
    }
}
