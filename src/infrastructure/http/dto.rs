//! Data Transfer Objects
//!
//! Item 的 JSON 形状：`{"id":int,"first_name":string,"last_name":string,"age":int}`

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::domain::{Item, ItemDraft};
use crate::infrastructure::http::error::ApiError;

/// 创建 / 替换请求体
///
/// 解码规则:
/// - 只读取 body 中的第一个 JSON 值，其后的内容忽略
/// - 字段名不区分大小写（`First_Name` 等同 `first_name`）
/// - 缺失字段或 `null` 取零值，未知字段忽略
/// - 客户端给的 id 只校验类型，之后丢弃
#[derive(Debug, Default)]
pub struct ItemRequest {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
}

impl ItemRequest {
    /// 解码请求体，不要求 Content-Type
    pub fn decode(body: &[u8]) -> Result<Self, ApiError> {
        Self::decode_first_value(body).map_err(|reason| {
            tracing::debug!(error = %reason, "Failed to decode item body");
            ApiError::invalid_body()
        })
    }

    fn decode_first_value(body: &[u8]) -> Result<Self, String> {
        let value = serde_json::Deserializer::from_slice(body)
            .into_iter::<Value>()
            .next()
            .ok_or_else(|| "empty body".to_string())?
            .map_err(|e| e.to_string())?;

        let fields = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(fields) => fields,
            other => return Err(format!("expected an object, got {}", other)),
        };

        let mut request = Self::default();
        for (key, value) in fields {
            if key.eq_ignore_ascii_case("first_name") {
                request.first_name = field(&key, value, request.first_name)?;
            } else if key.eq_ignore_ascii_case("last_name") {
                request.last_name = field(&key, value, request.last_name)?;
            } else if key.eq_ignore_ascii_case("age") {
                request.age = field(&key, value, request.age)?;
            } else if key.eq_ignore_ascii_case("id") {
                field::<i64>(&key, value, 0)?;
            }
        }

        Ok(request)
    }
}

/// 解码单个字段，`null` 保留当前值
fn field<T: DeserializeOwned>(key: &str, value: Value, current: T) -> Result<T, String> {
    serde_json::from_value::<Option<T>>(value)
        .map(|decoded| decoded.unwrap_or(current))
        .map_err(|e| format!("field {}: {}", key, e))
}

impl From<ItemRequest> for ItemDraft {
    fn from(req: ItemRequest) -> Self {
        ItemDraft {
            first_name: req.first_name,
            last_name: req.last_name,
            age: req.age,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.value(),
            first_name: item.first_name,
            last_name: item.last_name,
            age: item.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemId;

    #[test]
    fn test_decode_ignores_client_id() {
        let req = ItemRequest::decode(br#"{"id":77,"first_name":"A","last_name":"B","age":30}"#)
            .unwrap();
        assert_eq!(ItemDraft::from(req), ItemDraft::new("A", "B", 30));
    }

    #[test]
    fn test_decode_missing_fields_default() {
        let req = ItemRequest::decode(br#"{"first_name":"A"}"#).unwrap();
        assert_eq!(ItemDraft::from(req), ItemDraft::new("A", "", 0));

        let req = ItemRequest::decode(b"null").unwrap();
        assert_eq!(ItemDraft::from(req), ItemDraft::default());
    }

    #[test]
    fn test_decode_field_names_ignore_case() {
        let req =
            ItemRequest::decode(br#"{"First_Name":"Z","LAST_NAME":"Y","Age":5}"#).unwrap();
        assert_eq!(ItemDraft::from(req), ItemDraft::new("Z", "Y", 5));
    }

    #[test]
    fn test_decode_reads_first_value_only() {
        let req = ItemRequest::decode(br#"{"first_name":"A","last_name":"B","age":30}{}"#)
            .unwrap();
        assert_eq!(ItemDraft::from(req), ItemDraft::new("A", "B", 30));

        let req = ItemRequest::decode(b"{\"age\":1}\n[trailing").unwrap();
        assert_eq!(req.age, 1);
    }

    #[test]
    fn test_decode_null_field_keeps_zero_value() {
        let req = ItemRequest::decode(br#"{"first_name":null,"age":null}"#).unwrap();
        assert_eq!(ItemDraft::from(req), ItemDraft::default());
    }

    #[test]
    fn test_decode_rejects_malformed_body() {
        let bodies: [&[u8]; 8] = [
            b"",
            b"   ",
            b"{",
            b"not json",
            br#"{"age":"old"}"#,
            br#"{"age":1.5}"#,
            br#"{"id":"abc"}"#,
            b"[1,2]",
        ];
        for body in bodies {
            assert!(
                matches!(ItemRequest::decode(body), Err(ApiError::BadRequest(ref m)) if m == "Invalid request body"),
                "body {:?} should be rejected",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn test_response_wire_format() {
        let item = Item::from_draft(ItemId::new(1), ItemDraft::new("A", "B", 30));
        let json = serde_json::to_string(&ItemResponse::from(item)).unwrap();
        assert_eq!(json, r#"{"id":1,"first_name":"A","last_name":"B","age":30}"#);
    }
}
