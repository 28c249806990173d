//! Shell document wrapped around every rendered view.

/// The page shell: a full HTML document whose body holds a single
/// `<div class="App">` container for the routed view.
#[derive(Debug, Clone)]
pub struct Layout {
    title: String,
}

impl Layout {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Wrap a view fragment. `None` renders the empty container.
    pub fn wrap(&self, fragment: Option<&str>) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body><div class=\"App\">{}</div></body>\n</html>\n",
            crate::views::escape_html(&self.title),
            fragment.unwrap_or_default()
        )
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new("Storefront")
    }
}
