use crate::core::{IdentifierStyle, RawName, StructIdentifier};

/// `Guild Member` -> `cord_guild_member_t`, using the default style.
pub fn to_struct_identifier(raw: &str) -> StructIdentifier {
    IdentifierStyle::default().apply(&RawName::new(raw))
}

impl IdentifierStyle {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Lowercases the words of `raw` and joins them with underscores. A blank name
    /// produces an empty base (`cord__t`).
    pub fn apply(&self, raw: &RawName) -> StructIdentifier {
        let base = raw.words().join("_");
        StructIdentifier::new(&self.prefix, &base, &self.suffix)
    }

    /// Inverse of [`apply`](Self::apply) on the identifier text: the underscore-separated
    /// words between prefix and suffix, or `None` if `identifier` is not in this style.
    pub fn words_of<'a>(&self, identifier: &'a str) -> Option<Vec<&'a str>> {
        let base = identifier
            .strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.suffix.as_str())?;
        Some(base.split('_').filter(|w| !w.is_empty()).collect())
    }
}
