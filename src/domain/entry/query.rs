//! Query shape for the entries endpoint.

/// Parameters for `GET .../entries`.
///
/// An empty query fetches every entry the service is willing to return.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryQuery {
    pub content_type: Option<String>,
    /// `fields.<name> = <value>` equality filters, in insertion order.
    pub field_equals: Vec<(String, String)>,
    pub limit: Option<u32>,
    pub skip: Option<u32>,
    pub order: Option<String>,
    pub locale: Option<String>,
}

impl EntryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Filter on `fields.<field> == value`.
    pub fn field_eq(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.field_equals.push((field.into(), value.into()));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Query parameters as `(key, value)` pairs, `content_type` first.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(ct) = &self.content_type {
            params.push(("content_type".to_string(), ct.clone()));
        }
        for (field, value) in &self.field_equals {
            params.push((format!("fields.{field}"), value.clone()));
        }
        if let Some(l) = self.limit {
            params.push(("limit".to_string(), l.to_string()));
        }
        if let Some(s) = self.skip {
            params.push(("skip".to_string(), s.to_string()));
        }
        if let Some(o) = &self.order {
            params.push(("order".to_string(), o.clone()));
        }
        if let Some(l) = &self.locale {
            params.push(("locale".to_string(), l.clone()));
        }
        params
    }

    /// URL-encoded query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        // Serializing a list of string pairs cannot fail.
        serde_urlencoded::to_string(self.to_params()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_has_no_params() {
        let q = EntryQuery::new();
        assert!(q.is_empty());
        assert!(q.to_params().is_empty());
        assert_eq!(q.to_query_string(), "");
    }

    #[test]
    fn test_slug_query_string() {
        let q = EntryQuery::new()
            .field_eq("slug", "my-post")
            .content_type("blog");
        assert!(!q.is_empty());
        assert_eq!(q.to_query_string(), "content_type=blog&fields.slug=my-post");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let q = EntryQuery::new().field_eq("slug", "a b&c=d");
        assert_eq!(q.to_query_string(), "fields.slug=a+b%26c%3Dd");
    }

    #[test]
    fn test_paging_and_order_params() {
        let q = EntryQuery::new()
            .content_type("blog")
            .limit(10)
            .skip(20)
            .order("-sys.createdAt")
            .locale("en-US");
        assert_eq!(
            q.to_params(),
            vec![
                ("content_type".to_string(), "blog".to_string()),
                ("limit".to_string(), "10".to_string()),
                ("skip".to_string(), "20".to_string()),
                ("order".to_string(), "-sys.createdAt".to_string()),
                ("locale".to_string(), "en-US".to_string()),
            ]
        );
    }
}
