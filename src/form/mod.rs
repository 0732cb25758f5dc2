//! 创建链接的表单：字段校验、请求构建与提交状态

mod state;
mod validation;

pub use state::LinkForm;
pub use validation::{FieldErrors, FormField, ValidationError, build_request};
