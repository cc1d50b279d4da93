mod add;
mod edit;
mod list;

pub use add::AddReview as Add;
pub use edit::EditReview as Edit;
pub use list::ListQuery;

use serde::{Deserialize, Deserializer};

// parseInt-style coercion for JSON bodies: numbers pass through, numeric
// strings parse, anything else collapses to None so the caller's default
// applies instead of rejecting the request.
pub(crate) fn lenient_rate<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(number)) => number.as_i64().map(|n| n as i32),
        Some(serde_json::Value::String(text)) => text.trim().parse::<i32>().ok(),
        _ => None,
    })
}

// Same coercion for query-string parameters, which always arrive as strings.
pub(crate) fn lenient_index<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|text| text.trim().parse::<i64>().ok()))
}
