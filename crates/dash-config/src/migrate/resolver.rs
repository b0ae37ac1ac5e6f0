//! Category lookup-or-create
//!
//! The document's own `categories` list is the only state: a name seen
//! earlier in the same run resolves to the category created then.

use crate::ids::IdGenerator;
use crate::model::{Category, TargetDocument};

/// Return the category named `name`, creating it if missing
///
/// Matching is exact and case-sensitive. A new category gets a fresh id,
/// position 0, and is appended to `doc.categories`; an existing one is
/// returned untouched.
pub fn resolve_category<'a>(
    doc: &'a mut TargetDocument,
    name: &str,
    ids: &dyn IdGenerator,
) -> &'a Category {
    if let Some(pos) = doc.categories.iter().position(|c| c.name == name) {
        return &doc.categories[pos];
    }

    let category = Category::new(ids.next_id(), name);
    tracing::debug!(id = %category.id, name, "created category");

    let pos = doc.categories.len();
    doc.categories.push(category);
    &doc.categories[pos]
}
