//! Synthesized User/Group models with Django's default field sets, used when
//! the input references the auth models without defining them.

use django2gorm_schema::prelude::*;

fn field(name: &str, ty: &str, tag: &str) -> GoItem {
    GoItem::Field(GoField::new(name, ty, Some(tag.to_string())))
}

#[must_use]
pub fn user() -> GoModel {
    let mut go = GoModel::new("User");
    go.table = Some("auth_user".to_string());
    go.synthesized = true;
    go.items = vec![
        field("ID", "int64", "primaryKey"),
        field("Email", "string", "column:email"),
        field("First_name", "string", "column:first_name"),
        field("Last_name", "string", "column:last_name"),
        field("Is_superuser", "bool", "column:is_superuser"),
        field("Is_staff", "bool", "column:is_staff"),
        field("Date_joined", "time.Time", "column:date_joined"),
    ];

    go
}

#[must_use]
pub fn group() -> GoModel {
    let mut go = GoModel::new("Group");
    go.table = Some("auth_group".to_string());
    go.synthesized = true;
    go.items = vec![
        field("ID", "int64", "primaryKey"),
        field("Name", "string", "column:name"),
    ];

    go
}
