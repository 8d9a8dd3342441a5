//! Descriptor translation: Django model descriptors in, GORM struct
//! descriptors plus a filled [`Report`] out.
//!
//! The mapper never fails. Unrecognized constructors degrade to the
//! placeholder Go type, unreadable relation targets to the placeholder
//! target name; each degradation adds one report record and one paired
//! inline comment to the output descriptor.

mod builtin;


use django2gorm_schema::prelude::*;

///
/// MapOptions
///

#[derive(Clone, Copy, Debug)]
pub struct MapOptions {
    pub add_user_model: bool,
    pub add_group_model: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            add_user_model: true,
            add_group_model: true,
        }
    }
}

/// Translate parsed models in encounter order. User/Group are usually
/// missing from a models.py but referenced by it, so synthesized versions
/// with Django's default field sets are prepended when absent.
#[must_use]
pub fn map_models(parsed: &[Model], opts: &MapOptions) -> (Vec<GoModel>, Report) {
    let mut report = Report::new();
    let mut models = Vec::new();

    let found_user = parsed.iter().any(|m| m.name == "User");
    let found_group = parsed.iter().any(|m| m.name == "Group");

    if opts.add_user_model && !found_user {
        models.push(builtin::user());
    }
    if opts.add_group_model && !found_group {
        models.push(builtin::group());
    }

    for model in parsed {
        models.push(map_model(model, &mut report));
    }

    (models, report)
}

fn map_model(model: &Model, report: &mut Report) -> GoModel {
    let mut go = GoModel::new(&model.name);
    go.table = model.table.clone();

    for item in &model.items {
        match item {
            ModelItem::Comment(text) => go.items.push(GoItem::Comment(text.clone())),
            ModelItem::Unparsed(record) => degrade(record.clone(), &mut go, report),
            ModelItem::Field(field) => map_field(model, field, &mut go, report),
        }
    }

    go
}

fn map_field(model: &Model, field: &Field, go: &mut GoModel, report: &mut Report) {
    if field.is_primary_key() {
        go.items.push(GoItem::Field(GoField::new(
            field.name.to_uppercase(),
            "int64",
            Some("primaryKey".to_string()),
        )));
        return;
    }

    match field.relation() {
        RelationKind::None => map_scalar(model, field, go, report),
        RelationKind::ForeignKey => map_reference(model, field, false, go, report),
        RelationKind::OneToOne => map_reference(model, field, true, go, report),
        RelationKind::ManyToMany => map_many(model, field, go, report),
    }
}

fn map_scalar(model: &Model, field: &Field, go: &mut GoModel, report: &mut Report) {
    let ty = match ScalarKind::from_token(&field.token) {
        Some(kind) => kind.go_type().to_string(),
        None => {
            let record = ErrorRecord::new(
                field.line,
                format!("Unknown/unhandled field type '{}'", field.token),
            )
            .for_model(&model.name)
            .for_field(&field.name);
            degrade(record, go, report);

            PLACEHOLDER_GO_TYPE.to_string()
        }
    };

    go.items.push(GoItem::Field(GoField::new(
        naming::export_name(&field.name),
        ty,
        Some(format!("column:{}", field.name)),
    )));
}

/// ForeignKey and OneToOneField: a `<Name>ID int64` key column plus the
/// embedded reference field. One-to-one adds the uniqueness tag.
fn map_reference(model: &Model, field: &Field, unique: bool, go: &mut GoModel, report: &mut Report) {
    let target = resolve_target(model, field, go, report);
    let cap = naming::export_name(&field.name);

    let tag = if unique {
        format!("foreignKey:{}_id;unique", field.name)
    } else {
        format!("foreignKey:{}_id;association_foreignkey:id", field.name)
    };

    go.items
        .push(GoItem::Field(GoField::new(format!("{cap}ID"), "int64", Some(tag))));
    go.items.push(GoItem::Field(GoField::new(cap, target, None)));
}

/// ManyToManyField: a slice of the target plus a junction-table tag. The
/// junction name is inferred, so it is always logged for review.
fn map_many(model: &Model, field: &Field, go: &mut GoModel, report: &mut Report) {
    let target = resolve_target(model, field, go, report);
    let junction = naming::junction_name(&model.name, &target);

    let record = ErrorRecord::new(
        field.line,
        format!(
            "Inferred m2m junction table '{junction}' for {}.{}, review before use",
            model.name, field.name
        ),
    )
    .for_model(&model.name)
    .for_field(&field.name);
    degrade(record, go, report);

    let tag = format!(
        "many2many:{junction};joinForeignKey:{}_id",
        naming::snake(&model.name)
    );

    go.items.push(GoItem::Field(GoField::new(
        naming::export_name(&field.name),
        format!("[]{target}"),
        Some(tag),
    )));
}

fn resolve_target(model: &Model, field: &Field, go: &mut GoModel, report: &mut Report) -> String {
    match field.target().resolve(&model.name) {
        Some(name) => name,
        None => {
            let record = ErrorRecord::new(
                field.line,
                format!("Could not read related model name for {}.{}", model.name, field.name),
            )
            .for_model(&model.name)
            .for_field(&field.name);
            degrade(record, go, report);

            PLACEHOLDER_TARGET.to_string()
        }
    }
}

/// Record a recoverable problem: one report entry, one paired inline comment.
fn degrade(record: ErrorRecord, go: &mut GoModel, report: &mut Report) {
    go.items.push(GoItem::ErrorComment(record.inline_comment()));
    report.add(record);
}
