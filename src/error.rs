use thiserror::Error;

/// Errors raised while turning a sort string into an [`OrderList`](crate::OrderList).
///
/// All of these are caused by the caller's input, so a host serving HTTP
/// requests should answer them with a "bad request".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortingError {
    #[error("unsupported order direction: {0:?}")]
    UnsupportedDirection(String),

    #[error("invalid order component format: {0:?}")]
    InvalidFormat(String),

    #[error("attribute is not sortable: {0:?}")]
    InvalidAttribute(String),

    #[error("unknown attribute: {0:?}")]
    UnknownAttribute(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let error = SortingError::InvalidAttribute("password".to_owned());
        assert_eq!(error.to_string(), r#"attribute is not sortable: "password""#);

        let error = SortingError::UnsupportedDirection("^".to_owned());
        assert_eq!(error.to_string(), r#"unsupported order direction: "^""#);
    }
}
