//! Site navigation: the hamburger menu and the active-link marker.

pub const INDEX_PAGE: &str = "index.html";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }
}

/// File name of the current page from a URL path; the site root maps to
/// `index.html`.
pub fn current_page(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(page) if !page.is_empty() => page,
        _ => INDEX_PAGE,
    }
}

/// Whether a nav link's `href` points at `page`, written bare or as `./page`.
pub fn is_active_link(href: &str, page: &str) -> bool {
    href == page || href.strip_prefix("./") == Some(page)
}

/// Indices of the links in `hrefs` to mark active for the URL `path`.
pub fn active_links<'a, I>(hrefs: I, path: &str) -> Vec<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let page = current_page(path);
    hrefs
        .into_iter()
        .enumerate()
        .filter(|(_, href)| is_active_link(href, page))
        .map(|(i, _)| i)
        .collect()
}
