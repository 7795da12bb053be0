//! Posts sub-client — typed blog posts on top of the entry queries.

use crate::client::ContentClient;
use crate::domain::post::{BlogPost, BLOG_CONTENT_TYPE};
use crate::error::SdkError;

/// Sub-client for blog post operations.
pub struct Posts<'a> {
    pub(crate) client: &'a ContentClient,
}

impl<'a> Posts<'a> {
    /// Every `blog` entry of the space, in service order.
    ///
    /// Built on `fetch_all_posts`, which is unfiltered. Entries of other
    /// content types are skipped. Entries with no content type link are kept
    /// and validated as posts, so one of them missing a slug or title fails
    /// the whole listing with `SdkError::Validation`.
    pub async fn list(&self) -> Result<Vec<BlogPost>, SdkError> {
        let entries = self.client.fetch_all_posts().await?;
        let posts = entries
            .iter()
            .filter(|e| e.content_type.is_none() || e.is_content_type(BLOG_CONTENT_TYPE))
            .map(BlogPost::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(posts)
    }

    /// The post with the given slug, or `None` when nothing matches.
    pub async fn get(&self, slug: &str) -> Result<Option<BlogPost>, SdkError> {
        let entries = self.client.fetch_post_by_slug(slug).await?;
        match entries.first() {
            Some(entry) => Ok(Some(BlogPost::try_from(entry)?)),
            None => Ok(None),
        }
    }
}
