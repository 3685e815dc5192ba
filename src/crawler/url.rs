//! Diary listing URL construction

use url::Url;

use crate::utils::error::FetchError;

/// Public Letterboxd origin
pub const DEFAULT_BASE_URL: &str = "https://letterboxd.com";

/// URL builder for diary listing pages
pub struct DiaryUrlBuilder;

impl DiaryUrlBuilder {
    /// Build the listing URL for one page of a user's diary
    ///
    /// Format: `{base}/{username}/films/diary/page/{page}/`
    ///
    /// The username is appended as a single path segment, so any character
    /// that survived sanitizing is percent-encoded rather than interpreted.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` if `base` is not an absolute URL that
    /// can carry a path, or if `page` is zero
    ///
    /// # Examples
    ///
    /// ```
    /// use filmdiary::crawler::url::DiaryUrlBuilder;
    ///
    /// let url = DiaryUrlBuilder::page_url("https://letterboxd.com", "dave", 2).unwrap();
    /// assert_eq!(url, "https://letterboxd.com/dave/films/diary/page/2/");
    /// ```
    pub fn page_url(base: &str, username: &str, page: u32) -> Result<String, FetchError> {
        if page == 0 {
            return Err(FetchError::InvalidUrl(format!(
                "page numbers start at 1, got {page}"
            )));
        }

        let mut url =
            Url::parse(base).map_err(|e| FetchError::InvalidUrl(format!("{base}: {e}")))?;

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| FetchError::InvalidUrl(format!("{base}: cannot be a base")))?;
            segments
                .pop_if_empty()
                .push(username)
                .extend(["films", "diary", "page"])
                .push(&page.to_string())
                .push("");
        }

        Ok(url.into())
    }
}
