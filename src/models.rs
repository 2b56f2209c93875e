use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A file whose name matched a related-files query.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RelatedFile {
    /// First `<img src="...">` reference in the file, if one could be read.
    #[serde(serialize_with = "serialize_img", deserialize_with = "deserialize_img", default)]
    pub img: Option<String>,
    pub path: String,
}

impl RelatedFile {
    pub fn new(path: impl Into<String>, img: Option<String>) -> Self {
        Self {
            img,
            path: path.into(),
        }
    }
}

// Clients expect a string field; "no image" goes over the wire as "".
fn serialize_img<S: Serializer>(img: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(img.as_deref().unwrap_or(""))
}

fn deserialize_img<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let img = String::deserialize(deserializer)?;
    Ok(Some(img).filter(|img| !img.is_empty()))
}

#[derive(Debug, Default)]
pub struct RelatedFilesQuery {
    pub title: Option<String>,
}

impl RelatedFilesQuery {
    /// Builds the query from raw query-string pairs. Repeated keys keep their first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let title = pairs
            .into_iter()
            .find(|(key, _)| key == "title")
            .map(|(_, value)| value);
        Self { title }
    }
}
