use super::*;

/// Attribute names that may appear in an [`OrderList`].
///
/// Lookups are case-insensitive. Each name keeps the spelling it was first
/// inserted with, and iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortableKeys {
    keys: Vec<String>,
}

impl SortableKeys {
    pub fn new() -> Self {
        default()
    }

    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.contains(&key) {
            return false;
        }
        self.keys.push(key);
        true
    }

    pub fn contains(&self, key: &str) -> bool {
        self.canonical(key).is_some()
    }

    pub fn canonical(&self, key: &str) -> Option<&str> {
        self.keys
            .iter()
            .find(|candidate| candidate.eq_ignore_ascii_case(key))
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SortableKeys {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut keys = SortableKeys::new();
        for key in iter {
            keys.insert(key);
        }
        keys
    }
}

impl<S: Into<String>> Extend<S> for SortableKeys {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

/// Narrows the keys a caller may sort by.
///
/// Without an explicit request every known attribute is sortable. With one,
/// [`InvalidPolicy::Ignore`] keeps the requested keys that are known and
/// [`InvalidPolicy::Reject`] fails on the first key that isn't.
pub fn select_allowed_keys<S: AsRef<str>>(
    known: &SortableKeys,
    requested: Option<&[S]>,
    policy: InvalidPolicy,
) -> Result<SortableKeys, SortingError> {
    let requested = match requested {
        Some(requested) => requested,
        None => return Ok(known.clone()),
    };

    let mut selected = SortableKeys::new();
    for key in requested {
        let key = key.as_ref();
        match known.canonical(key) {
            Some(canonical) => {
                selected.insert(canonical);
            }
            None => match policy {
                InvalidPolicy::Ignore => {
                    debug!(key, "ignoring unknown acceptable key");
                }
                InvalidPolicy::Reject => {
                    return Err(SortingError::UnknownAttribute(key.to_owned()));
                }
            },
        }
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known() -> SortableKeys {
        SortableKeys::from_iter(["id", "name", "createdAt"])
    }

    #[test]
    fn lookups_ignore_case() {
        let keys = known();
        assert!(keys.contains("createdat"));
        assert!(keys.contains("NAME"));
        assert!(!keys.contains("email"));
        assert_eq!(keys.canonical("CREATEDAT"), Some("createdAt"));
    }

    #[test]
    fn deduplicates_ignoring_case() {
        let keys = SortableKeys::from_iter(["id", "ID", "name", "Id"]);
        assert_eq!(keys.iter().collect::<Vec<_>>(), vec!["id", "name"]);
    }

    #[test]
    fn defaults_to_known_keys() {
        for policy in [InvalidPolicy::Ignore, InvalidPolicy::Reject] {
            let selected =
                select_allowed_keys::<&str>(&known(), None, policy).unwrap();
            assert_eq!(selected, known());
        }
    }

    #[test]
    fn lenient_selection_intersects() {
        let requested = ["NAME", "password", "id"];
        let selected = select_allowed_keys(
            &known(),
            Some(&requested[..]),
            InvalidPolicy::Ignore,
        )
        .unwrap();
        assert_eq!(selected.iter().collect::<Vec<_>>(), vec!["name", "id"]);
    }

    #[test]
    fn strict_selection_rejects_unknown_keys() {
        let requested = ["name", "password", "email"];
        let error = select_allowed_keys(
            &known(),
            Some(&requested[..]),
            InvalidPolicy::Reject,
        )
        .unwrap_err();
        assert_eq!(error, SortingError::UnknownAttribute("password".into()));
    }

    #[test]
    fn strict_selection_accepts_known_keys() {
        let requested = vec!["createdat".to_owned()];
        let selected = select_allowed_keys(
            &known(),
            Some(&requested[..]),
            InvalidPolicy::Reject,
        )
        .unwrap();
        assert_eq!(selected.iter().collect::<Vec<_>>(), vec!["createdAt"]);
    }
}
