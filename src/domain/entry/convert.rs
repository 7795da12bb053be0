//! Conversions from wire types to domain types for entries.

use super::wire::{AssetResponse, EntriesResponse, EntryResponse, IncludesResponse};
use super::{Asset, Entry, EntryCollection, Includes};

impl From<EntryResponse> for Entry {
    fn from(e: EntryResponse) -> Self {
        Self {
            id: e.sys.id,
            content_type: e.sys.content_type.map(|link| link.sys.id),
            locale: e.sys.locale,
            revision: e.sys.revision,
            created_at: e.sys.created_at,
            updated_at: e.sys.updated_at,
            fields: e.fields,
        }
    }
}

impl From<AssetResponse> for Asset {
    fn from(a: AssetResponse) -> Self {
        Self {
            id: a.sys.id,
            locale: a.sys.locale,
            created_at: a.sys.created_at,
            updated_at: a.sys.updated_at,
            fields: a.fields,
        }
    }
}

impl From<IncludesResponse> for Includes {
    fn from(i: IncludesResponse) -> Self {
        Self {
            entries: i.entry.into_iter().map(Entry::from).collect(),
            assets: i.asset.into_iter().map(Asset::from).collect(),
        }
    }
}

impl From<EntriesResponse> for EntryCollection {
    fn from(r: EntriesResponse) -> Self {
        Self {
            items: r.items.into_iter().map(Entry::from).collect(),
            total: r.total,
            skip: r.skip,
            limit: r.limit,
            includes: r.includes.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_response_conversion_keeps_order() {
        let json = r#"{
            "total": 3,
            "skip": 0,
            "limit": 100,
            "items": [
                { "sys": { "id": "c", "contentType": { "sys": { "id": "blog" } } }, "fields": { "slug": "c" } },
                { "sys": { "id": "a", "contentType": { "sys": { "id": "author" } } }, "fields": {} },
                { "sys": { "id": "b" }, "fields": { "slug": "b" } }
            ]
        }"#;
        let resp: EntriesResponse = serde_json::from_str(json).unwrap();
        let collection: EntryCollection = resp.into();

        let ids: Vec<&str> = collection.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
        assert_eq!(collection.items[0].content_type.as_deref(), Some("blog"));
        assert_eq!(collection.items[1].content_type.as_deref(), Some("author"));
        assert!(collection.items[2].content_type.is_none());
        assert_eq!(collection.items[0].field_str("slug"), Some("c"));
        assert_eq!(collection.total, 3);
        assert!(collection.includes.is_empty());
    }

    #[test]
    fn test_includes_survive_conversion_and_serialization() {
        let json = r#"{
            "total": 1,
            "items": [{ "sys": { "id": "post" }, "fields": {} }],
            "includes": {
                "Asset": [{
                    "sys": { "id": "hero", "locale": "en-US" },
                    "fields": { "file": { "url": "//images.ctfassets.net/x.png" } }
                }]
            }
        }"#;
        let resp: EntriesResponse = serde_json::from_str(json).unwrap();
        let collection: EntryCollection = resp.into();

        assert_eq!(collection.includes.assets.len(), 1);
        assert_eq!(collection.includes.assets[0].id, "hero");
        assert_eq!(collection.includes.assets[0].locale.as_deref(), Some("en-US"));

        let out = serde_json::to_string(&collection).unwrap();
        assert!(out.contains("//images.ctfassets.net/x.png"));
    }
}
