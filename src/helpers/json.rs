use actix_web::web::Json;
use serde_derive::Serialize;

/// Uniform response envelope. Listings carry `list` + `total`, single
/// results carry `item`, bare acknowledgements carry neither.
#[derive(Serialize)]
pub struct JsonResponse<T> {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) item: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) list: Option<Vec<T>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) total: Option<i64>,
}

pub struct JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    item: Option<T>,
    list: Option<Vec<T>>,
    total: Option<i64>,
}

impl<T> Default for JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    fn default() -> Self {
        Self {
            item: None,
            list: None,
            total: None,
        }
    }
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder::default()
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    pub fn set_total(mut self, total: i64) -> Self {
        self.total = Some(total);
        self
    }

    pub fn ok(self, message: impl Into<String>) -> Json<JsonResponse<T>> {
        Json(JsonResponse {
            status: "OK".to_string(),
            message: message.into(),
            code: 200,
            item: self.item,
            list: self.list,
            total: self.total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_envelope_carries_list_and_total() {
        let response = JsonResponse::build()
            .set_list(vec!["a", "b"])
            .set_total(5)
            .ok("OK");
        let value = serde_json::to_value(&response.0).unwrap();

        assert_eq!(value["status"], "OK");
        assert_eq!(value["code"], 200);
        assert_eq!(value["total"], 5);
        assert_eq!(value["list"].as_array().unwrap().len(), 2);
        assert!(value.get("item").is_none());
    }

    #[test]
    fn acknowledgement_envelope_skips_absent_fields() {
        let response = JsonResponse::<()>::build().ok("Deleted");
        let value = serde_json::to_value(&response.0).unwrap();

        assert_eq!(value["message"], "Deleted");
        assert!(value.get("item").is_none());
        assert!(value.get("list").is_none());
        assert!(value.get("total").is_none());
    }
}
