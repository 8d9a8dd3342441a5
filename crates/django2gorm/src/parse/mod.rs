//! Line-oriented scanner over Django model source.
//!
//! This is deliberately not a Python parser: the tool is best-effort by
//! design, so a two-state scan (inside/outside a model block) with textual
//! matching is the whole grammar. Unrecognized lines outside a block are
//! ignored; inside a block, only field candidates that fail extraction are
//! recorded (as [`ModelItem::Unparsed`], which the mapper turns into report
//! entries).

use django2gorm_schema::prelude::*;

#[cfg(test)]
mod tests;

/// Scan source text and produce ordered model descriptors. Never fails.
#[must_use]
pub fn parse(source: &str) -> Vec<Model> {
    let mut scanner = Scanner::default();
    for raw in source.lines() {
        scanner.line(raw);
    }

    scanner.finish()
}

///
/// Scanner
///

#[derive(Default)]
struct Scanner {
    models: Vec<Model>,
    current: Option<Model>,
    prev: String,
    line_no: usize,
}

impl Scanner {
    fn line(&mut self, raw: &str) {
        self.line_no += 1;

        // An unindented `def` means we've left the class body.
        if raw.starts_with("def ") {
            self.close();
        }

        let line = raw.trim();

        if is_model_header(line) {
            self.close();
            if let Some(name) = class_name(line) {
                self.current = Some(Model::new(name, self.line_no));
            }
        } else if self.current.is_some() {
            self.block_line(line);
        }

        self.prev = line.to_string();
    }

    fn block_line(&mut self, line: &str) {
        let Some(model) = self.current.as_mut() else {
            return;
        };

        // `class Meta:` / `db_table = ...` pair sets a custom table name.
        if line.contains("db_table")
            && line.contains('=')
            && !line.starts_with('#')
            && self.prev.contains("class Meta:")
        {
            if let Some(value) = line.split('=').nth(1) {
                model.table = Some(clean_table_name(value));
            }
            return;
        }

        if let Some(text) = line.strip_prefix("\"\"\"") {
            model
                .items
                .push(ModelItem::Comment(text.replace("\"\"\"", "")));
            return;
        }

        if let Some(text) = line.strip_prefix('#') {
            model.items.push(ModelItem::Comment(text.to_string()));
            return;
        }

        if line.contains('=') && line.contains("models.") {
            if line.contains("getLogger") {
                return;
            }
            // Continuation of a multi-line statement we already gave up on.
            if self.prev.ends_with(',') || self.prev.ends_with('\\') {
                return;
            }

            match extract_field(line, self.line_no) {
                Some(field) => model.items.push(ModelItem::Field(field)),
                None => {
                    let record =
                        ErrorRecord::new(self.line_no, format!("Unknown/unhandled line: {line}"))
                            .for_model(&model.name);
                    model.items.push(ModelItem::Unparsed(record));
                }
            }
        }

        // Anything else (method bodies, decorators, blanks) is skipped.
    }

    fn close(&mut self) {
        if let Some(model) = self.current.take() {
            self.models.push(model);
        }
    }

    fn finish(mut self) -> Vec<Model> {
        self.close();

        self.models
    }
}

/// Catches `(models.Model)`, `(Model)`, `(MPTTModel)` and friends.
fn is_model_header(line: &str) -> bool {
    line.starts_with("class ") && line.ends_with("Model):")
}

fn class_name(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("class ")?;
    let name = rest.split('(').next()?.trim();

    (!name.is_empty()).then_some(name)
}

/// Pull name, constructor token and raw argument text out of a
/// `name = models.Token(args...)` line.
fn extract_field(line: &str, line_no: usize) -> Option<Field> {
    let (lhs, rhs) = line.split_once('=')?;
    let name = lhs.trim();
    if name.is_empty() {
        return None;
    }

    let constructor = rhs.trim().split_once("models.")?.1;
    let (token, _) = constructor.split_once('(')?;
    let token = token.trim();
    if token.is_empty() || !token.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return None;
    }

    let open = line.find('(')?;
    let args = match line.rfind(')') {
        Some(close) if close > open => &line[open + 1..close],
        _ => &line[open + 1..],
    };

    Some(Field::new(name, token, args.trim(), line_no))
}

fn clean_table_name(value: &str) -> String {
    value
        .trim()
        .replace("u\"", "")
        .replace("u'", "")
        .replace(['"', '\''], "")
}
