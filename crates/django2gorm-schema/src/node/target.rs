use serde::Serialize;

///
/// GoModel
/// One struct definition to emit. `table` produces a `TableName()` method;
/// `synthesized` marks the auto-generated User/Group models.
///

#[derive(Clone, Debug, Serialize)]
pub struct GoModel {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,

    pub synthesized: bool,
    pub items: Vec<GoItem>,
}

impl GoModel {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: None,
            synthesized: false,
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn field_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, GoItem::Field(_)))
            .count()
    }
}

///
/// GoItem
///

#[derive(Clone, Debug, Serialize)]
pub enum GoItem {
    Field(GoField),

    /// Carried-over source comment.
    Comment(String),

    /// Inline `!! ...` marker paired 1:1 with an ErrorRecord in the report.
    ErrorComment(String),
}

///
/// GoField
/// `tag` is the inner gorm tag text, without the backtick wrapper.
///

#[derive(Clone, Debug, Serialize)]
pub struct GoField {
    pub name: String,
    pub ty: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl GoField {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<String>, tag: Option<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            tag,
        }
    }
}
