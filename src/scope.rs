use super::*;

use mongodb::options::FindOptions;

/// Query shaping produced by a scope: `{}` or `{ "order": [[key, dir], ...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeDirective {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderList>,
}

impl ScopeDirective {
    pub fn with_order(order: OrderList) -> Self {
        Self { order: Some(order) }
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_none()
    }

    /// Keys from `other` come after ours in precedence.
    pub fn merge(self, other: Self) -> Self {
        let order = match (self.order, other.order) {
            (Some(mut existing), Some(incoming)) => {
                existing.extend(incoming);
                Some(existing)
            }
            (existing, incoming) => existing.or(incoming),
        };
        Self { order }
    }

    pub fn apply_to(&self, options: &mut FindOptions) {
        let order = match &self.order {
            Some(order) => order,
            None => return,
        };
        let incoming = order.to_document();
        let combined = match options.sort.take() {
            Some(mut existing) => {
                for (key, direction) in incoming {
                    if !existing.contains_key(&key) {
                        existing.insert(key, direction);
                    }
                }
                existing
            }
            None => incoming,
        };
        options.sort = Some(combined);
    }
}

/// The `sortable` scope of a model.
///
/// The model's attributes are read once, when the scope is attached, and
/// serve as the default allow-list for every call afterwards.
#[derive(Debug, Clone)]
pub struct SortableScope {
    model: &'static str,
    keys: Arc<SortableKeys>,
    options: SortOptions,
}

impl SortableScope {
    pub fn attach<T: Model>(options: SortOptions) -> Self {
        let keys = SortableKeys::from_iter(T::attributes());
        trace!(
            model = T::NAME,
            keys = keys.len(),
            policy = ?options.on_invalid,
            "attaching sortable scope"
        );
        Self {
            model: T::NAME,
            keys: Arc::new(keys),
            options,
        }
    }

    pub fn model(&self) -> &'static str {
        self.model
    }

    pub fn sortable_keys(&self) -> &SortableKeys {
        &self.keys
    }

    pub fn options(&self) -> &SortOptions {
        &self.options
    }

    /// `acceptable` narrows the sortable keys for this call; all of the
    /// model's attributes are sortable when it is `None`.
    pub fn apply<S: AsRef<str>>(
        &self,
        params: &Document,
        acceptable: Option<&[S]>,
    ) -> Result<ScopeDirective, SortingError> {
        let Self {
            model,
            keys,
            options,
        } = self;

        let sort = match params.get(&options.param) {
            Some(Bson::String(sort)) if !sort.is_empty() => sort,
            Some(Bson::String(_)) | None => return Ok(default()),
            Some(other) => {
                debug!(
                    model,
                    param = %options.param,
                    value = %other,
                    "ignoring non-string sort parameter"
                );
                return Ok(default());
            }
        };

        let allowed = select_allowed_keys(keys, acceptable, options.on_invalid)?;
        if allowed.is_empty() && options.on_invalid == InvalidPolicy::Ignore {
            return Ok(default());
        }

        let mut order = parse_order(sort, &allowed, options.on_invalid)?;
        if order.is_empty() {
            return Ok(default());
        }
        if options.canonical_keys {
            order = order
                .into_iter()
                .map(|OrderComponent { key, direction }| {
                    let key = match allowed.canonical(&key) {
                        Some(canonical) => canonical.to_owned(),
                        None => key,
                    };
                    OrderComponent { key, direction }
                })
                .collect();
        }

        trace!(model, %sort, %order, "applied sortable scope");
        Ok(ScopeDirective::with_order(order))
    }

    pub fn register(self, scopes: &mut Scopes) {
        let name = self.options.scope_name.clone();
        scopes.register(name, move |params, acceptable| {
            let directive = self.apply(params, acceptable)?;
            Ok(directive)
        });
    }
}

pub type ScopeFn = dyn Fn(&Document, Option<&[String]>) -> Result<ScopeDirective>
    + Send
    + Sync;

#[derive(Derivative, Clone)]
#[derivative(Debug)]
struct Scope {
    name: String,

    #[derivative(Debug = "ignore")]
    apply: Arc<ScopeFn>,
}

/// Named query modifiers registered for a model.
#[derive(Debug, Clone, Default)]
pub struct Scopes {
    scopes: BTreeMap<String, Scope>,
}

impl Scopes {
    pub fn new() -> Self {
        default()
    }

    pub fn register<F>(&mut self, name: impl Into<String>, scope: F) -> bool
    where
        F: Fn(&Document, Option<&[String]>) -> Result<ScopeDirective>,
        F: Send + Sync + 'static,
    {
        let name = name.into();
        let scope = Scope {
            name: name.clone(),
            apply: Arc::new(scope),
        };
        let replaced = self.scopes.insert(name.clone(), scope).is_some();
        if replaced {
            debug!(scope = %name, "overriding scope");
        }
        replaced
    }

    pub fn contains(&self, name: &str) -> bool {
        self.scopes.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scopes.keys().map(String::as_str)
    }

    pub fn apply(
        &self,
        name: &str,
        params: &Document,
        acceptable: Option<&[String]>,
    ) -> Result<ScopeDirective> {
        let scope = match self.scopes.get(name) {
            Some(scope) => scope,
            None => bail!("unknown scope: {}", name),
        };
        trace!(scope = %scope.name, %params, "applying scope");
        (scope.apply)(params, acceptable)
            .with_context(|| format!("failed to apply scope {}", name))
    }

    pub fn apply_all<I, N>(
        &self,
        names: I,
        params: &Document,
    ) -> Result<ScopeDirective>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let mut directive = ScopeDirective::default();
        for name in names {
            let incoming = self.apply(name.as_ref(), params, None)?;
            directive = directive.merge(incoming);
        }
        Ok(directive)
    }
}
