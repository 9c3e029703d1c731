use heck::MixedCase;

/// A record type whose attributes can be sorted on.
pub trait Model: 'static {
    const NAME: &'static str;

    /// Field names as declared on the Rust type.
    const FIELDS: &'static [&'static str];

    /// Attribute names as stored, which is the mixed case form of each of
    /// the [`FIELDS`](Model::FIELDS) unless overridden.
    fn attributes() -> Vec<String> {
        Self::FIELDS
            .iter()
            .map(|field| field.to_mixed_case())
            .collect()
    }
}
