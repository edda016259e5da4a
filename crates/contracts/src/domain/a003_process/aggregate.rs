use crate::domain::common::{reference, Resource};
use serde::{Deserialize, Serialize};

/// Процесс (вид работ), к которому списывается время
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Resource for Process {
    fn collection_path() -> &'static str {
        "/processes"
    }

    fn element_name() -> &'static str {
        "Process"
    }

    fn list_name() -> &'static str {
        "Processes"
    }

    fn list_key() -> &'static str {
        "processes"
    }

    fn item_key() -> &'static str {
        "process"
    }
}

/// Активность внутри процесса
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, alias = "process", deserialize_with = "reference::deserialize")]
    pub process_id: String,
    pub name: String,
}

impl Activity {
    /// `GET /processes/:id/activities`
    pub fn list_path(process_id: &str) -> String {
        format!("{}/activities", Process::item_path(process_id))
    }
}

impl Resource for Activity {
    fn collection_path() -> &'static str {
        "/activities"
    }

    fn element_name() -> &'static str {
        "Activity"
    }

    fn list_name() -> &'static str {
        "Activities"
    }

    fn list_key() -> &'static str {
        "activities"
    }

    fn item_key() -> &'static str {
        "activity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activities_path_is_nested_under_process() {
        assert_eq!(Activity::list_path("p 1"), "/processes/p%201/activities");
    }

    #[test]
    fn test_activity_without_process_field() {
        let activity: Activity = serde_json::from_str(r#"{"_id":"a1","name":"Review"}"#).unwrap();
        assert_eq!(activity.process_id, "");
        let activity: Activity =
            serde_json::from_str(r#"{"_id":"a2","name":"Review","process":{"_id":"p1"}}"#).unwrap();
        assert_eq!(activity.process_id, "p1");
    }
}
