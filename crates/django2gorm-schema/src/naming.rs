use convert_case::{Case, Casing};

/// Go export name used by the generator: first character uppercased, the
/// remainder lowercased, underscores kept (`categories_allowed` becomes
/// `Categories_allowed`).
#[must_use]
pub fn export_name(ident: &str) -> String {
    let mut chars = ident.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

/// Snake-case form of a model name, used in table and key identifiers.
#[must_use]
pub fn snake(name: &str) -> String {
    name.to_case(Case::Snake)
}

/// Join-table identifier for a many-to-many pair.
///
/// The two snake-cased model names are joined in lexicographic order, so the
/// identifier is the same whichever side declares the relation.
#[must_use]
pub fn junction_name(a: &str, b: &str) -> String {
    let (a, b) = (snake(a), snake(b));
    if a <= b {
        format!("{a}_{b}")
    } else {
        format!("{b}_{a}")
    }
}
