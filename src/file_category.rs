/// File categorization over the configured extension table.
///
/// A [`CategoryMap`] is built once from the configuration's `file_categories`
/// table and answers "which category folder does this extension belong to"
/// as a pure lookup with no side effects.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use tidykit::file_category::{CategoryMap, FALLBACK_CATEGORY};
///
/// let mut table = IndexMap::new();
/// table.insert("images".to_string(), vec![".png".to_string(), ".jpg".to_string()]);
///
/// let categories = CategoryMap::new(&table);
/// assert_eq!(categories.category_for(".png"), "images");
/// assert_eq!(categories.category_for(".PNG"), "images");
/// assert_eq!(categories.category_for(".xyz"), FALLBACK_CATEGORY);
/// ```
use indexmap::IndexMap;
use std::path::Path;

/// Category assigned to files whose extension matches no configured entry.
pub const FALLBACK_CATEGORY: &str = "others";

/// Maps dot-prefixed file extensions to category names.
///
/// Lookup is case-insensitive and first-match-wins over the configured
/// category order. An empty table sends every file to the fallback category.
#[derive(Debug, Clone)]
pub struct CategoryMap {
    categories: IndexMap<String, Vec<String>>,
}

impl CategoryMap {
    /// Build a lookup table from a configured category map.
    ///
    /// Extensions are lowercased on the way in so that every later lookup is
    /// a plain comparison.
    pub fn new(table: &IndexMap<String, Vec<String>>) -> Self {
        let categories = table
            .iter()
            .map(|(name, extensions)| {
                let lowered = extensions.iter().map(|e| e.to_lowercase()).collect();
                (name.clone(), lowered)
            })
            .collect();
        Self { categories }
    }

    /// The category for a dot-prefixed extension string.
    ///
    /// `suffix` is the final extension of a file name including its leading
    /// dot (`".png"`), or the empty string for files without one. Returns the
    /// first configured category whose extension list contains the suffix,
    /// else [`FALLBACK_CATEGORY`].
    pub fn category_for(&self, suffix: &str) -> &str {
        let suffix = suffix.to_lowercase();
        for (name, extensions) in &self.categories {
            if extensions.iter().any(|e| *e == suffix) {
                return name;
            }
        }
        FALLBACK_CATEGORY
    }

    /// The category for a file path, keyed on its extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidykit::config::Config;
    /// use tidykit::file_category::CategoryMap;
    /// use std::path::Path;
    ///
    /// let categories = CategoryMap::new(&Config::default().file_categories);
    /// assert_eq!(categories.category_for_path(Path::new("holiday.jpg")), "images");
    /// assert_eq!(categories.category_for_path(Path::new("notes")), "others");
    /// ```
    pub fn category_for_path(&self, path: &Path) -> &str {
        self.category_for(&file_suffix(path))
    }
}

/// The dot-prefixed final extension of a path, or `""` when there is none.
///
/// `"archive.tar.gz"` yields `".gz"`; dotfiles such as `".bashrc"` and bare
/// names such as `"README"` yield the empty string.
pub fn file_suffix(path: &Path) -> String {
    match path.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy()),
        None => String::new(),
    }
}
