//! Deterministic Go source rendering. Output order is fixed: header,
//! optional Tabler helper, models in descriptor order, optional example
//! main(). Byte-identical output for identical descriptors.

#[cfg(test)]
mod tests;

use django2gorm_schema::prelude::*;

/// Package and import block, postgres driver enabled by default.
const HEADER: &str = r#"package main

import (
	"gorm.io/gorm"
	// Enable one from below as needed, postgres included as default
	"gorm.io/driver/postgres"
	// "gorm.io/driver/mysql"
	// "gorm.io/driver/sqlite"
	"time"
	"fmt"
	"database/sql"
)

"#;

/// Interface helper, only useful when custom table names are in play.
const TABLER: &str = r#"type Tabler interface {
	TableName() string
}

"#;

/// Example entry point; update with real DB type and credentials.
const FOOTER: &str = r#"//
// EXAMPLE / help / reference, update this with your DB type / credentials.
//
func main() {
	dsn := "host=localhost user=USER password=PWD dbname=DBNAME port=5432 TimeZone=Europe/London"
	db, err := gorm.Open(postgres.Open(dsn), &gorm.Config{})
	if err != nil {
		fmt.Printf("Error connecting: %s\n", err)
	}

	var user User
	db.First(&user)
	fmt.Printf("First email in User table: %s\n", user.Email)
}
"#;

/// Render the generated-code blob.
#[must_use]
pub fn render(models: &[GoModel], include_helpers: bool) -> String {
    let mut out = String::new();

    if include_helpers {
        out.push_str(HEADER);
    }

    // Tabler only earns its place when the input overrode a table name.
    if models.iter().any(|m| !m.synthesized && m.table.is_some()) {
        out.push_str(TABLER);
    }

    for model in models {
        render_model(model, &mut out);
    }

    if include_helpers {
        out.push_str(FOOTER);
    }

    out
}

fn render_model(model: &GoModel, out: &mut String) {
    out.push_str(&format!("type {} struct {{\n", model.name));

    for item in &model.items {
        match item {
            GoItem::Comment(text) | GoItem::ErrorComment(text) => {
                out.push_str(&format!("\t// {text}\n"));
            }
            GoItem::Field(field) => render_field(field, out),
        }
    }

    out.push_str("}\n\n");

    if let Some(table) = &model.table {
        out.push_str(&format!(
            "func ({}) TableName() string {{\n\treturn \"{table}\"\n}}\n\n",
            model.name
        ));
    }
}

fn render_field(field: &GoField, out: &mut String) {
    match &field.tag {
        Some(tag) => out.push_str(&format!(
            "\t{}\t\t{}\t`gorm:\"{tag}\"`\n",
            field.name, field.ty
        )),
        None => out.push_str(&format!("\t{}\t\t{}\n", field.name, field.ty)),
    }
}
