use super::*;

pub trait EntitySorting {
    fn to_document(&self) -> Document;
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortingDirection {
    Asc,
    Desc,
}

impl SortingDirection {
    /// Resolves the sign prefix of an order component: no sign or `+` sorts
    /// ascending, `-` sorts descending.
    pub fn from_sign(sign: &str) -> Result<Self, SortingError> {
        use SortingDirection::*;
        match sign {
            "" | "+" => Ok(Asc),
            "-" => Ok(Desc),
            other => Err(SortingError::UnsupportedDirection(other.to_owned())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        use SortingDirection::*;
        match self {
            Asc => "ASC",
            Desc => "DESC",
        }
    }
}

impl Default for SortingDirection {
    fn default() -> Self {
        Self::Asc
    }
}

impl Display for SortingDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(self.as_str(), f)
    }
}

impl From<SortingDirection> for Bson {
    fn from(direction: SortingDirection) -> Self {
        use SortingDirection::*;
        let direction = match direction {
            Asc => 1,
            Desc => -1,
        };
        direction.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_signs() {
        assert_eq!(SortingDirection::from_sign(""), Ok(SortingDirection::Asc));
        assert_eq!(SortingDirection::from_sign("+"), Ok(SortingDirection::Asc));
        assert_eq!(
            SortingDirection::from_sign("-"),
            Ok(SortingDirection::Desc)
        );
    }

    #[test]
    fn rejects_other_signs() {
        for sign in ["^", "|", "*", "++", " "] {
            let error = SortingDirection::from_sign(sign).unwrap_err();
            assert_eq!(error, SortingError::UnsupportedDirection(sign.into()));
        }
    }

    #[test]
    fn encodes_as_keyword_and_bson() {
        assert_eq!(SortingDirection::Desc.to_string(), "DESC");
        assert_eq!(Bson::from(SortingDirection::Asc), Bson::Int32(1));
        assert_eq!(Bson::from(SortingDirection::Desc), Bson::Int32(-1));
    }
}
