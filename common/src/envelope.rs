//! Response envelope unwrapping.
//!
//! The API wraps payloads inconsistently: `{data: {data: ...}}`, `{data: ...}`
//! or the bare payload. Lists may also sit under `items` or `rows`, with
//! pagination in `pagination` or `meta`.

use crate::error::ApiError;
use crate::table::Page;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Picks `body.data.data`, then `body.data`, then `body`.
fn payload(body: &Value) -> &Value {
    match body.get("data") {
        Some(data) => match data.get("data") {
            Some(inner) if !inner.is_null() => inner,
            _ if !data.is_null() => data,
            _ => body,
        },
        None => body,
    }
}

pub fn unwrap_data<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    serde_json::from_value(payload(&body).clone()).map_err(|e| ApiError::Decode(e.to_string()))
}

fn list_items(body: &Value) -> Option<&Vec<Value>> {
    if let Some(items) = body.as_array() {
        return Some(items);
    }
    let data = body.get("data");
    data.and_then(|d| d.get("data"))
        .and_then(Value::as_array)
        .or_else(|| data.and_then(Value::as_array))
        .or_else(|| {
            let container = data.unwrap_or(body);
            ["items", "rows", "results"]
                .iter()
                .find_map(|key| container.get(*key).and_then(Value::as_array))
        })
        .or_else(|| {
            ["items", "rows", "results"]
                .iter()
                .find_map(|key| body.get(*key).and_then(Value::as_array))
        })
}

fn pagination(body: &Value) -> Option<&Value> {
    let data = body.get("data");
    ["pagination", "meta"].iter().find_map(|key| {
        body.get(*key)
            .or_else(|| data.and_then(|d| d.get(*key)))
            .filter(|value| value.is_object())
    })
}

fn number(value: &Value, keys: &[&str]) -> Option<u64> {
    keys.iter().find_map(|key| {
        value.get(*key).and_then(|v| {
            v.as_u64()
                .or_else(|| v.as_str().and_then(|s| s.parse().ok()))
        })
    })
}

/// Extracts a page of records. A body without any list yields an empty page.
pub fn unwrap_list<T: DeserializeOwned>(body: Value) -> Result<Page<T>, ApiError> {
    let items = match list_items(&body) {
        Some(values) => values
            .iter()
            .cloned()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()
            .map_err(|e| ApiError::Decode(e.to_string()))?,
        None => Vec::new(),
    };

    let Some(meta) = pagination(&body) else {
        return Ok(Page::single(items));
    };
    let page = number(meta, &["page", "currentPage"]).unwrap_or(1).max(1) as u32;
    let total = number(meta, &["total", "totalItems", "count"]);
    let total_pages = number(meta, &["totalPages", "pages", "lastPage"])
        .or_else(|| {
            let limit = number(meta, &["limit", "perPage", "pageSize"])?;
            let total = total?;
            Some(if limit == 0 { 1 } else { total.div_ceil(limit) })
        })
        .unwrap_or(page as u64)
        .max(1) as u32;

    Ok(Page {
        items,
        page,
        total_pages,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: u32,
    }

    #[test]
    fn test_unwrap_data_chain() {
        let nested: Item = unwrap_data(json!({"data": {"data": {"id": 1}}})).unwrap();
        assert_eq!(nested, Item { id: 1 });
        let single: Item = unwrap_data(json!({"data": {"id": 2}})).unwrap();
        assert_eq!(single, Item { id: 2 });
        let bare: Item = unwrap_data(json!({"id": 3})).unwrap();
        assert_eq!(bare, Item { id: 3 });
    }

    #[test]
    fn test_unwrap_list_shapes() {
        let page: Page<Item> = unwrap_list(json!([{"id": 1}])).unwrap();
        assert_eq!(page.items.len(), 1);

        let page: Page<Item> = unwrap_list(json!({"data": [{"id": 1}, {"id": 2}]})).unwrap();
        assert_eq!(page.items.len(), 2);

        let page: Page<Item> = unwrap_list(json!({"data": {"data": [{"id": 5}]}})).unwrap();
        assert_eq!(page.items, vec![Item { id: 5 }]);

        let page: Page<Item> = unwrap_list(json!({"data": {"items": [{"id": 7}]}})).unwrap();
        assert_eq!(page.items, vec![Item { id: 7 }]);
    }

    #[test]
    fn test_missing_list_is_empty() {
        let page: Page<Item> = unwrap_list(json!({"success": true})).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_pagination_metadata() {
        let body = json!({
            "data": [{"id": 1}],
            "pagination": {"page": "2", "limit": 10, "total": 25}
        });
        let page: Page<Item> = unwrap_list(body).unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total, Some(25));

        let body = json!({"data": {"rows": [], "meta": {"currentPage": 1, "lastPage": 4}}});
        let page: Page<Item> = unwrap_list(body).unwrap();
        assert_eq!(page.total_pages, 4);
        assert!(page.has_next());
    }

    #[test]
    fn test_bad_item_is_decode_error() {
        let result: Result<Page<Item>, _> = unwrap_list(json!({"data": [{"id": "x"}]}));
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
