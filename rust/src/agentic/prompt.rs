//! Prompt Construction
//!
//! Mechanical formatting of the suggestion prompt: the full catalog plus
//! the raw query, with instructions to answer as a JSON array. The
//! response contract deliberately omits URLs; those are always filled in
//! from the catalog, never taken from the model.

use crate::catalog::IconCatalog;
use crate::scorer::MAX_SUGGESTIONS;

/// Build the suggestion prompt for one query
pub fn build_suggestion_prompt(query: &str, catalog: &IconCatalog) -> String {
    let mut inventory = String::new();
    for library in catalog.libraries() {
        let icons: Vec<String> = library
            .icons
            .iter()
            .map(|icon| format!("{} ({})", icon.name, icon.keywords.join(", ")))
            .collect();
        inventory.push_str(&format!(
            "{}: {}\n",
            library.display_name,
            icons.join(", ")
        ));
    }

    format!(
        r#"Given the user query "{query}", suggest the most relevant icons from these libraries:

{inventory}
Return a JSON array of the top {max} most relevant icons with this structure:
[
  {{
    "name": "icon-name",
    "library": "Library Name",
    "description": "Brief description of why this icon fits the query"
  }}
]

Focus on semantic meaning and context, not just keyword matching."#,
        query = query,
        inventory = inventory,
        max = MAX_SUGGESTIONS
    )
}
