use super::*;
use crate::{map, parse};
use django2gorm_schema::prelude::*;

fn models_for(source: &str) -> (Vec<GoModel>, Report) {
    map::map_models(
        &parse::parse(source),
        &map::MapOptions {
            add_user_model: false,
            add_group_model: false,
        },
    )
}

const AUTHOR: &str = "
class Author(models.Model):
    name = models.CharField(max_length=100)
";

#[test]
fn helpers_wrap_the_structs() {
    let (models, _) = models_for(AUTHOR);
    let code = render(&models, true);

    assert!(code.starts_with("package main"));
    assert!(code.contains("\"gorm.io/gorm\""));
    assert!(code.contains("type Author struct {"));
    assert!(code.contains("func main() {"));
}

#[test]
fn helpers_can_be_left_out() {
    let (models, _) = models_for(AUTHOR);
    let code = render(&models, false);

    assert!(code.starts_with("type Author struct {"));
    assert!(!code.contains("package main"));
    assert!(!code.contains("func main() {"));
}

#[test]
fn fields_render_with_gorm_tags() {
    let (models, _) = models_for(AUTHOR);
    let code = render(&models, false);

    assert!(code.contains("\tName\t\tstring\t`gorm:\"column:name\"`"));
}

#[test]
fn custom_table_name_emits_tabler_and_table_name_method() {
    let source = "
class Author(models.Model):
    name = models.CharField(max_length=100)

    class Meta:
        db_table = 'legacy_authors'
";
    let (models, _) = models_for(source);
    let code = render(&models, false);

    assert!(code.contains("type Tabler interface {"));
    assert!(code.contains("func (Author) TableName() string {"));
    assert!(code.contains("\treturn \"legacy_authors\""));
}

#[test]
fn synthesized_models_do_not_pull_in_tabler() {
    let (models, _) = map::map_models(&parse::parse(AUTHOR), &map::MapOptions::default());
    let code = render(&models, false);

    assert!(!code.contains("type Tabler interface {"));
    assert!(code.contains("func (User) TableName() string {"));
    assert!(code.contains("\treturn \"auth_user\""));
    assert!(code.contains("func (Group) TableName() string {"));
}

#[test]
fn every_report_record_has_exactly_one_inline_comment() {
    let source = "
class Section(MPTTModel):
    parent = models.TreeForeignKey('self', null=True)
    tags = models.ManyToManyField(Tag)
    broken = models.CharField max_length
";
    let (models, report) = models_for(source);
    let code = render(&models, true);

    assert_eq!(report.len(), 3);
    assert_eq!(code.matches("// !!").count(), report.len());
}

#[test]
fn rendering_is_deterministic() {
    let (models, _) = models_for(AUTHOR);

    assert_eq!(render(&models, true), render(&models, true));
}
