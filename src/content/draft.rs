use crate::util::split_keywords;
use serde::{Deserialize, Deserializer, Serialize};

/// Article returned by the generative service.
///
/// `keywords` is accepted either as a JSON array or as a single
/// comma-separated string, since models produce both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default, deserialize_with = "string_or_list")]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub slug: String,
}

fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Keywords {
        Joined(String),
        List(Vec<String>),
    }

    Ok(match Keywords::deserialize(deserializer)? {
        Keywords::Joined(joined) => split_keywords(&joined),
        Keywords::List(list) => list
            .into_iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect(),
    })
}
