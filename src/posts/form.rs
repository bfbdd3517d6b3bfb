use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::res;

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct PostForm {
    #[validate(length(min = 1, max = 4000, message = "posts must be 1 to 4000 characters"))]
    pub(crate) content: String,
}

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct CommentForm {
    #[validate(length(min = 1, max = 1000, message = "comments must be 1 to 1000 characters"))]
    pub(crate) content: String,
}

/// Flattens validator output into the `{errors}` fragment of a form page.
pub(crate) fn error_list(errors: &ValidationErrors) -> String {
    let mut items = String::new();
    for (field, errs) in errors.field_errors() {
        for err in errs {
            let message = err
                .message
                .as_deref()
                .map(str::to_owned)
                .unwrap_or_else(|| format!("invalid {field}"));
            items += &format!("<li>{}</li>", res::escape(&message));
        }
    }

    if items.is_empty() {
        String::new()
    } else {
        format!("<ul class=\"errors\">{items}</ul>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_post_is_rejected() {
        let form = PostForm { content: String::new() };
        let errors = form.validate().unwrap_err();
        assert!(error_list(&errors).contains("1 to 4000"));
    }

    #[test]
    fn oversized_comment_is_rejected() {
        let form = CommentForm { content: "x".repeat(1001) };
        assert!(form.validate().is_err());
    }

    #[test]
    fn ordinary_content_passes() {
        assert!(PostForm { content: "hello".into() }.validate().is_ok());
        assert!(CommentForm { content: "hi".into() }.validate().is_ok());
    }
}
