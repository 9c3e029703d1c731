use super::*;

static COMPONENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?)([A-Za-z0-9_]+)").expect("valid component pattern")
});

/// A single `key` / `+key` / `-key` entry of a sort string.
///
/// Serializes as a `[key, "ASC" | "DESC"]` pair.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "(String, SortingDirection)")]
#[serde(from = "(String, SortingDirection)")]
pub struct OrderComponent {
    pub key: String,
    pub direction: SortingDirection,
}

impl OrderComponent {
    pub fn new(key: impl Into<String>, direction: SortingDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }

    /// Parses a component such as `"propA"`, `"+propB"` or `"-propC"`.
    ///
    /// Only the leading run of word characters after the sign is taken as
    /// the key, so `"name.first"` yields `name`. The key is lowercased.
    pub fn parse(token: &str) -> Result<Self, SortingError> {
        let captures = COMPONENT_PATTERN
            .captures(token)
            .ok_or_else(|| SortingError::InvalidFormat(token.to_owned()))?;
        let sign = captures.get(1).map_or("", |m| m.as_str());
        let key = captures.get(2).map_or("", |m| m.as_str());

        let direction = SortingDirection::from_sign(sign)?;
        let component = Self {
            key: key.to_ascii_lowercase(),
            direction,
        };
        Ok(component)
    }
}

impl FromStr for OrderComponent {
    type Err = SortingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for OrderComponent {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        use SortingDirection::*;
        match self.direction {
            Asc => write!(f, "{}", self.key),
            Desc => write!(f, "-{}", self.key),
        }
    }
}

impl From<OrderComponent> for (String, SortingDirection) {
    fn from(component: OrderComponent) -> Self {
        let OrderComponent { key, direction } = component;
        (key, direction)
    }
}

impl From<(String, SortingDirection)> for OrderComponent {
    fn from((key, direction): (String, SortingDirection)) -> Self {
        Self { key, direction }
    }
}
