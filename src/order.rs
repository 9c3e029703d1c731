use super::*;

/// Parsed sort components in order of precedence.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderList(Vec<OrderComponent>);

impl OrderList {
    pub fn new() -> Self {
        default()
    }

    pub fn push(&mut self, component: OrderComponent) {
        self.0.push(component)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrderComponent> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<OrderComponent> {
        self.0
    }
}

impl EntitySorting for OrderList {
    fn to_document(&self) -> Document {
        let mut doc = Document::new();
        for OrderComponent { key, direction } in self.iter() {
            if doc.contains_key(key) {
                continue;
            }
            doc.insert(key, Bson::from(*direction));
        }
        doc
    }
}

impl FromIterator<OrderComponent> for OrderList {
    fn from_iter<I: IntoIterator<Item = OrderComponent>>(iter: I) -> Self {
        Self(Vec::from_iter(iter))
    }
}

impl Extend<OrderComponent> for OrderList {
    fn extend<I: IntoIterator<Item = OrderComponent>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl IntoIterator for OrderList {
    type Item = OrderComponent;
    type IntoIter = std::vec::IntoIter<OrderComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a OrderList {
    type Item = &'a OrderComponent;
    type IntoIter = std::slice::Iter<'a, OrderComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for OrderList {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, component) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            Display::fmt(component, f)?;
        }
        Ok(())
    }
}

/// Parses a sort string such as `"name,+id,-createdAt"` against `allowed`.
///
/// Components are split on `,` and are not trimmed. Under
/// [`InvalidPolicy::Ignore`] malformed or disallowed components are dropped
/// and this never fails; under [`InvalidPolicy::Reject`] the first bad
/// component fails the whole parse. An empty sort string yields an empty
/// list either way.
pub fn parse_order(
    sort_value: &str,
    allowed: &SortableKeys,
    policy: InvalidPolicy,
) -> Result<OrderList, SortingError> {
    let mut order = OrderList::new();
    if sort_value.is_empty() {
        return Ok(order);
    }

    for token in sort_value.split(',') {
        let component = match OrderComponent::parse(token) {
            Ok(component) => component,
            Err(error) => match policy {
                InvalidPolicy::Ignore => {
                    debug!(token, %error, "ignoring order component");
                    continue;
                }
                InvalidPolicy::Reject => return Err(error),
            },
        };

        if !allowed.contains(&component.key) {
            match policy {
                InvalidPolicy::Ignore => {
                    debug!(key = %component.key, "ignoring unsortable key");
                    continue;
                }
                InvalidPolicy::Reject => {
                    return Err(SortingError::InvalidAttribute(component.key));
                }
            }
        }

        order.push(component);
    }

    trace!(sort = sort_value, %order, "parsed order");
    Ok(order)
}
