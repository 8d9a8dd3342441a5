use crate::types::{RelationKind, RelationTarget};
use serde::Serialize;

///
/// Field
/// One recognized field assignment inside a model block. `token` is the
/// constructor name as written (`CharField`, `ForeignKey`, ...); `args` is
/// the raw text between the constructor's parentheses.
///

#[derive(Clone, Debug, Serialize)]
pub struct Field {
    pub name: String,
    pub token: String,
    pub args: String,
    pub line: usize,
}

impl Field {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        token: impl Into<String>,
        args: impl Into<String>,
        line: usize,
    ) -> Self {
        Self {
            name: name.into(),
            token: token.into(),
            args: args.into(),
            line,
        }
    }

    #[must_use]
    pub fn relation(&self) -> RelationKind {
        RelationKind::from_token(&self.token)
    }

    #[must_use]
    pub fn target(&self) -> RelationTarget {
        RelationTarget::from_args(&self.args)
    }

    /// Primary-key shorthand: a field named id/pk declared with primary_key.
    #[must_use]
    pub fn is_primary_key(&self) -> bool {
        matches!(self.name.as_str(), "id" | "pk" | "ID" | "PK") && self.args.contains("primary_key")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RelationKind;

    #[test]
    fn primary_key_detection() {
        let pk = Field::new("id", "AutoField", "primary_key=True", 1);
        let plain = Field::new("credits", "IntegerField", "default=0", 2);
        let named = Field::new("uid", "AutoField", "primary_key=True", 3);

        assert!(pk.is_primary_key());
        assert!(!plain.is_primary_key());
        assert!(!named.is_primary_key());
    }

    #[test]
    fn relation_kind_is_derived_from_the_token() {
        let fk = Field::new("author", "ForeignKey", "Author, on_delete=models.CASCADE", 1);

        assert_eq!(fk.relation(), RelationKind::ForeignKey);
        assert_eq!(fk.target().resolve("Book"), Some("Author".to_string()));
    }
}
