//! Foreign keys on the wire: either a bare id or a populated object
//! (`{"_id": "...", "name": "..."}`); both read as the id string.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Reference {
    Id(String),
    Object {
        #[serde(alias = "_id")]
        id: String,
    },
}

impl Reference {
    fn into_id(self) -> String {
        match self {
            Reference::Id(id) | Reference::Object { id } => id,
        }
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Reference::deserialize(deserializer).map(Reference::into_id)
}

pub mod optional {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(Option::<Reference>::deserialize(deserializer)?
            .map(Reference::into_id)
            .filter(|id| !id.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    #[derive(serde::Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "super::deserialize")]
        owner: String,
        #[serde(default, deserialize_with = "super::optional::deserialize")]
        assignee: Option<String>,
    }

    #[test]
    fn test_bare_id_and_populated_object() {
        let bare: Probe = serde_json::from_str(r#"{"owner":"o1"}"#).unwrap();
        let populated: Probe =
            serde_json::from_str(r#"{"owner":{"_id":"o2","name":"Acme"},"assignee":null}"#)
                .unwrap();
        assert_eq!(bare.owner, "o1");
        assert_eq!(bare.assignee, None);
        assert_eq!(populated.owner, "o2");
    }

    #[test]
    fn test_empty_optional_reference_is_none() {
        let probe: Probe = serde_json::from_str(r#"{"owner":"o1","assignee":""}"#).unwrap();
        assert_eq!(probe.assignee, None);
    }
}
