//! Page link construction for paginated list endpoints.

use url::Url;

use crate::Pagination;

const PAGE_PARAM: &str = "page";
const LIMIT_PARAM: &str = "limit";

impl Pagination {
    /// Link to `page` of the same listing, preserving other query parameters.
    ///
    /// Existing `page` and `limit` parameters on `base` are replaced.
    ///
    /// # Examples
    /// ```
    /// use pagination::Pagination;
    /// use url::Url;
    ///
    /// let base = Url::parse("https://talentlink.test/jobs?q=rust&page=9").expect("url");
    /// let meta = Pagination::new(1, 20, 45).expect("valid");
    ///
    /// let link = meta.page_url(&base, 2);
    /// assert_eq!(link.as_str(), "https://talentlink.test/jobs?q=rust&page=2&limit=20");
    /// ```
    #[must_use]
    pub fn page_url(&self, base: &Url, page: u32) -> Url {
        let retained: Vec<(String, String)> = base
            .query_pairs()
            .filter(|(key, _)| key != PAGE_PARAM && key != LIMIT_PARAM)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        let mut url = base.clone();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(retained)
            .append_pair(PAGE_PARAM, &page.to_string())
            .append_pair(LIMIT_PARAM, &self.limit().to_string());
        url
    }

    /// Link to the following page, if there is one.
    #[must_use]
    pub fn next_url(&self, base: &Url) -> Option<Url> {
        self.has_next()
            .then(|| self.page_url(base, self.page().saturating_add(1)))
    }

    /// Link to the preceding page, if there is one.
    #[must_use]
    pub fn previous_url(&self, base: &Url) -> Option<Url> {
        self.has_previous()
            .then(|| self.page_url(base, self.page().saturating_sub(1)))
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn base() -> Url {
        Url::parse("https://talentlink.test/api/v1/jobs?location=remote")
            .unwrap_or_else(|err| panic!("fixture URL must parse: {err}"))
    }

    #[rstest]
    fn middle_page_links_both_ways(base: Url) {
        let meta = Pagination::new(2, 10, 30).expect("valid");

        let next = meta.next_url(&base).expect("next page exists");
        let previous = meta.previous_url(&base).expect("previous page exists");

        assert_eq!(next.query(), Some("location=remote&page=3&limit=10"));
        assert_eq!(previous.query(), Some("location=remote&page=1&limit=10"));
    }

    #[rstest]
    fn single_page_has_no_links(base: Url) {
        let meta = Pagination::new(1, 10, 4).expect("valid");
        assert!(meta.next_url(&base).is_none());
        assert!(meta.previous_url(&base).is_none());
    }
}
