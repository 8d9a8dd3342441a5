use super::*;
use crate::DEMO;
use django2gorm_schema::prelude::*;

#[test]
fn demo_model_parses_into_one_descriptor() {
    let models = parse(DEMO);

    assert_eq!(models.len(), 1);

    let profile = &models[0];
    assert_eq!(profile.name, "UserProfile");
    assert_eq!(profile.fields().count(), 11);

    // db_table comes after the fields but still lands on the descriptor
    assert_eq!(profile.table.as_deref(), Some("userprofile"));
}

#[test]
fn field_extraction_keeps_token_and_raw_args() {
    let source = "
class Book(models.Model):
    author = models.ForeignKey(Author, on_delete=models.CASCADE)
    title = models.CharField(max_length=200)
";
    let models = parse(source);
    let book = &models[0];
    let author = book.fields().next().unwrap();

    assert_eq!(author.name, "author");
    assert_eq!(author.token, "ForeignKey");
    assert_eq!(author.args, "Author, on_delete=models.CASCADE");
    assert_eq!(author.relation(), RelationKind::ForeignKey);
}

#[test]
fn unindented_def_closes_the_current_block() {
    let source = "
class Author(models.Model):
    name = models.CharField(max_length=100)

def helper():
    stray = models.CharField(max_length=1)
";
    let models = parse(source);

    assert_eq!(models.len(), 1);
    assert_eq!(models[0].fields().count(), 1);
}

#[test]
fn back_to_back_classes_both_parse() {
    let source = "
class Author(models.Model):
    name = models.CharField(max_length=100)

class Book(models.Model):
    title = models.CharField(max_length=200)
    author = models.ForeignKey(Author, on_delete=models.CASCADE)
";
    let models = parse(source);

    assert_eq!(models.len(), 2);
    assert_eq!(models[0].name, "Author");
    assert_eq!(models[1].name, "Book");
}

#[test]
fn toplevel_code_and_imports_are_ignored() {
    let source = "
from django.db import models
import logging

logger = logging.getLogger(__name__)

class Author(models.Model):
    name = models.CharField(max_length=100)
";
    let models = parse(source);

    assert_eq!(models.len(), 1);
    assert_eq!(models[0].fields().count(), 1);
}

#[test]
fn comments_and_docstrings_carry_through() {
    let source = "
class Author(models.Model):
    \"\"\"Writes the books.\"\"\"
    # legacy column
    name = models.CharField(max_length=100)
";
    let models = parse(source);
    let items = &models[0].items;

    assert!(matches!(&items[0], ModelItem::Comment(c) if c.contains("Writes the books.")));
    assert!(matches!(&items[1], ModelItem::Comment(c) if c.contains("legacy column")));
    assert!(matches!(&items[2], ModelItem::Field(_)));
}

#[test]
fn malformed_field_candidate_becomes_unparsed() {
    let source = "
class Author(models.Model):
    name = models.CharField max_length
";
    let models = parse(source);
    let items = &models[0].items;

    assert_eq!(items.len(), 1);
    assert!(matches!(&items[0], ModelItem::Unparsed(record) if record.line == 3));
}

#[test]
fn continuation_and_logger_lines_are_skipped_silently() {
    let source = "
class Author(models.Model):
    name = models.CharField(max_length=100,
        verbose = models.something_on_the_continuation
    log = models.getLogger(__name__)
";
    let models = parse(source);

    // only the (truncated) first line is treated as a field candidate
    assert_eq!(models[0].fields().count(), 1);
    assert!(
        !models[0]
            .items
            .iter()
            .any(|item| matches!(item, ModelItem::Unparsed(_)))
    );
}

#[test]
fn meta_table_name_strips_quote_markers() {
    let source = "
class Author(models.Model):
    name = models.CharField(max_length=100)

    class Meta:
        db_table = u'legacy_authors'
";
    let models = parse(source);

    assert_eq!(models[0].table.as_deref(), Some("legacy_authors"));
    assert_eq!(models[0].table_name(), "legacy_authors");
}

#[test]
fn mptt_style_base_classes_still_match() {
    let source = "
class Section(MPTTModel):
    name = models.CharField(max_length=50)
";
    let models = parse(source);

    assert_eq!(models.len(), 1);
    assert_eq!(models[0].name, "Section");
}
