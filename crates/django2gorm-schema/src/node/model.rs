use crate::{node::Field, report::ErrorRecord};
use serde::Serialize;

///
/// Model
/// One Django model block, in source encounter order. `table` is only set
/// when a `class Meta: db_table = ...` override was seen.
///

#[derive(Clone, Debug, Serialize)]
pub struct Model {
    pub name: String,
    pub line: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,

    pub items: Vec<ModelItem>,
}

impl Model {
    #[must_use]
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            line,
            table: None,
            items: Vec::new(),
        }
    }

    /// Django's conventional default table name.
    #[must_use]
    pub fn default_table(&self) -> String {
        format!("app_{}s", self.name.to_lowercase())
    }

    #[must_use]
    pub fn table_name(&self) -> String {
        self.table
            .clone()
            .unwrap_or_else(|| self.default_table())
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.items.iter().filter_map(|item| match item {
            ModelItem::Field(field) => Some(field),
            _ => None,
        })
    }
}

///
/// ModelItem
///

#[derive(Clone, Debug, Serialize)]
pub enum ModelItem {
    Field(Field),

    /// A `#` comment or docstring line carried through to the output.
    Comment(String),

    /// A field-candidate line that could not be read.
    Unparsed(ErrorRecord),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_name_prefers_the_meta_override() {
        let mut model = Model::new("UserProfile", 1);
        assert_eq!(model.table_name(), "app_userprofiles");

        model.table = Some("userprofile".to_string());
        assert_eq!(model.table_name(), "userprofile");
    }

    #[test]
    fn fields_iterator_skips_comments() {
        let mut model = Model::new("Author", 1);
        model.items.push(ModelItem::Comment("bio".to_string()));
        model
            .items
            .push(ModelItem::Field(Field::new("name", "CharField", "max_length=100", 2)));

        assert_eq!(model.fields().count(), 1);
    }
}
