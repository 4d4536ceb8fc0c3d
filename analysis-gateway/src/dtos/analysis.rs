use serde::{Deserialize, Deserializer, Serialize};

/// Findings reported by the analysis service for one uploaded document.
///
/// Fields are relayed as received: a `null` stays `null`. `document` and
/// `issues` must be present in the reply, `status` falls back to
/// `"completed"` only when the key is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Name of the analysed document, as reported by the analysis service.
    #[serde(deserialize_with = "nullable")]
    pub document: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub issues: Option<Vec<Issue>>,
    #[serde(default = "default_status")]
    pub status: Option<String>,
}

/// A single problem found in a document.
///
/// All fields are free-form text. `location` and `severity` distinguish a
/// missing key (`None`) from an explicit `null` (`Some(None)`) so either
/// form survives the relay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub severity: Option<Option<String>>,
}

/// Required key whose value may be `null`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

/// Optional key: only called when the key is present, so `null` becomes
/// `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn default_status() -> Option<String> {
    Some("completed".to_string())
}

impl AnalysisResult {
    pub fn issues(&self) -> &[Issue] {
        self.issues.as_deref().unwrap_or_default()
    }

    /// Fill `severity` on issues that arrived without one, missing or `null`.
    pub fn with_default_severity(mut self, severity: Option<&str>) -> Self {
        if let Some(severity) = severity {
            for issue in self
                .issues
                .iter_mut()
                .flatten()
                .filter(|i| i.severity().is_none())
            {
                issue.severity = Some(Some(severity.to_string()));
            }
        }
        self
    }
}

impl Issue {
    pub fn severity(&self) -> Option<&str> {
        self.severity.as_ref().and_then(|s| s.as_deref())
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| l.as_deref())
    }
}
