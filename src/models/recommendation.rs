use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the response field carrying the ranked titles
const RECOMMENDATIONS_FIELD: &str = "recommendations";

/// Ranked movie titles, in the order the service returned them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationList(Vec<String>);

impl RecommendationList {
    /// Extracts the `recommendations` field of a decoded response body
    ///
    /// A missing field or a non-array value (the service answers unknown titles
    /// with a plain string) yields an empty list rather than an error. Array
    /// entries are kept in order; non-string entries keep their JSON text.
    pub fn from_response(body: &Value) -> Self {
        let Some(field) = body.get(RECOMMENDATIONS_FIELD) else {
            tracing::warn!("Response body has no recommendations field");
            return Self::default();
        };

        let Some(items) = field.as_array() else {
            tracing::warn!(value = %field, "Recommendations field is not an array");
            return Self::default();
        };

        let titles = items
            .iter()
            .map(|item| match item {
                Value::String(title) => title.clone(),
                other => {
                    tracing::warn!(value = %other, "Non-string recommendation entry");
                    other.to_string()
                }
            })
            .collect();

        Self(titles)
    }

    pub fn titles(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for RecommendationList {
    fn from(titles: Vec<String>) -> Self {
        Self(titles)
    }
}
