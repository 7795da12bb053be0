//! Wire types for entry responses (REST).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `{ "sys": { "type": "Link", "linkType": "ContentType", "id": "blog" } }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkResponse {
    pub sys: LinkSys,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkSys {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub link_type: Option<String>,
}

/// System metadata attached to every entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntrySys {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<LinkResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Raw entry from the REST API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntryResponse {
    pub sys: EntrySys,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

/// Raw asset (image, file) from the REST API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetResponse {
    pub sys: EntrySys,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

/// Linked entries and assets referenced by `items`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IncludesResponse {
    #[serde(rename = "Entry", default)]
    pub entry: Vec<EntryResponse>,
    #[serde(rename = "Asset", default)]
    pub asset: Vec<AssetResponse>,
}

/// REST response for `GET /spaces/{space}/environments/{env}/entries`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntriesResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
    pub items: Vec<EntryResponse>,
    #[serde(default)]
    pub includes: IncludesResponse,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub sys: Option<LinkSys>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    /// `"<ErrorId>: <message>"`, falling back to whichever half is present.
    pub fn get_message(&self) -> String {
        let id = self.sys.as_ref().map(|s| s.id.as_str());
        match (id, self.message.as_deref()) {
            (Some(id), Some(msg)) => format!("{id}: {msg}"),
            (Some(id), None) => id.to_string(),
            (None, Some(msg)) => msg.to_string(),
            (None, None) => "Unknown error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_response_deserialize() {
        let json = r#"{
            "sys": { "type": "Array" },
            "total": 1,
            "skip": 0,
            "limit": 100,
            "items": [{
                "sys": {
                    "id": "5KsDBWseXY6QegucYAoacS",
                    "type": "Entry",
                    "createdAt": "2019-03-11T14:00:00.000Z",
                    "updatedAt": "2019-03-12T09:30:00.000Z",
                    "revision": 3,
                    "locale": "en-US",
                    "contentType": {
                        "sys": { "type": "Link", "linkType": "ContentType", "id": "blog" }
                    }
                },
                "fields": { "title": "Hello", "slug": "hello" }
            }]
        }"#;
        let resp: EntriesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.total, 1);
        assert_eq!(resp.items.len(), 1);

        let sys = &resp.items[0].sys;
        assert_eq!(sys.id, "5KsDBWseXY6QegucYAoacS");
        assert_eq!(sys.revision, Some(3));
        let ct = sys.content_type.as_ref().unwrap();
        assert_eq!(ct.sys.id, "blog");
        assert_eq!(ct.sys.link_type.as_deref(), Some("ContentType"));
        assert_eq!(resp.items[0].fields["slug"], "hello");
    }

    #[test]
    fn test_entries_response_keeps_includes() {
        let json = r#"{
            "total": 1,
            "items": [{
                "sys": { "id": "post" },
                "fields": {
                    "author": { "sys": { "type": "Link", "linkType": "Entry", "id": "jane" } },
                    "heroImage": { "sys": { "type": "Link", "linkType": "Asset", "id": "hero" } }
                }
            }],
            "includes": {
                "Entry": [{ "sys": { "id": "jane", "type": "Entry" }, "fields": { "name": "Jane" } }],
                "Asset": [{
                    "sys": { "id": "hero", "type": "Asset" },
                    "fields": { "title": "Hero", "file": { "url": "//images.ctfassets.net/x.png" } }
                }]
            }
        }"#;
        let resp: EntriesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.includes.entry.len(), 1);
        assert_eq!(resp.includes.entry[0].sys.id, "jane");
        assert_eq!(resp.includes.asset.len(), 1);
        assert_eq!(
            resp.includes.asset[0].fields["file"]["url"],
            "//images.ctfassets.net/x.png"
        );
    }

    #[test]
    fn test_entries_response_without_includes() {
        let resp: EntriesResponse = serde_json::from_str(r#"{ "items": [] }"#).unwrap();
        assert!(resp.includes.entry.is_empty());
        assert!(resp.includes.asset.is_empty());

        let partial: EntriesResponse =
            serde_json::from_str(r#"{ "items": [], "includes": { "Asset": [] } }"#).unwrap();
        assert!(partial.includes.entry.is_empty());
    }

    #[test]
    fn test_entry_without_fields_defaults_to_empty_map() {
        let json = r#"{ "sys": { "id": "x" } }"#;
        let entry: EntryResponse = serde_json::from_str(json).unwrap();
        assert!(entry.fields.is_empty());
        assert!(entry.sys.content_type.is_none());
    }

    #[test]
    fn test_entries_response_requires_items() {
        let json = r#"{ "total": 0 }"#;
        assert!(serde_json::from_str::<EntriesResponse>(json).is_err());
    }

    #[test]
    fn test_error_response_message() {
        let json = r#"{
            "sys": { "type": "Error", "id": "AccessTokenInvalid" },
            "message": "The access token you sent could not be found or is invalid.",
            "requestId": "abc-123"
        }"#;
        let err: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            err.get_message(),
            "AccessTokenInvalid: The access token you sent could not be found or is invalid."
        );
        assert_eq!(err.request_id.as_deref(), Some("abc-123"));

        let bare: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(bare.get_message(), "Unknown error");
    }
}
