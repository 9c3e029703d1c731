use super::*;

/// What to do with sort components that are malformed or not sortable.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidPolicy {
    /// Drop the offending component and keep the rest.
    Ignore,
    /// Fail the whole parse.
    Reject,
}

impl Default for InvalidPolicy {
    fn default() -> Self {
        Self::Ignore
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SortOptions {
    #[builder(default)]
    pub on_invalid: InvalidPolicy,

    /// Echo keys with the model's spelling instead of lowercasing them.
    #[builder(default)]
    pub canonical_keys: bool,

    /// Name of the query parameter holding the sort string.
    #[builder(default = DEFAULT_PARAM.to_owned(), setter(into))]
    pub param: String,

    #[builder(default = DEFAULT_SCOPE_NAME.to_owned(), setter(into))]
    pub scope_name: String,
}

const DEFAULT_PARAM: &str = "sort";
const DEFAULT_SCOPE_NAME: &str = "sortable";

impl Default for SortOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_lenient_sort_param() {
        let options = SortOptions::default();
        assert_eq!(options.on_invalid, InvalidPolicy::Ignore);
        assert!(!options.canonical_keys);
        assert_eq!(options.param, "sort");
        assert_eq!(options.scope_name, "sortable");
    }

    #[test]
    fn deserializes_partial_options() {
        let options: SortOptions =
            serde_json::from_str(r#"{ "onInvalid": "reject", "param": "order" }"#)
                .unwrap();
        assert_eq!(
            options,
            SortOptions::builder()
                .on_invalid(InvalidPolicy::Reject)
                .param("order")
                .build()
        );
    }
}
