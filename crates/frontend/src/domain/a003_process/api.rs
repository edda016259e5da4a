use contracts::domain::a003_process::{Activity, Process};
use contracts::shared::api::ApiError;

use crate::shared::api_utils::{api_url, fetch_list, fetch_list_at};

pub async fn fetch_processes() -> Result<Vec<Process>, ApiError> {
    fetch_list::<Process>().await
}

/// `GET /processes/:id/activities`
pub async fn fetch_activities(process_id: String) -> Result<Vec<Activity>, ApiError> {
    fetch_list_at::<Activity>(&api_url(&Activity::list_path(&process_id))).await
}

/// Activities of every process, one request per process.
pub async fn fetch_all_activities(processes: &[Process]) -> Result<Vec<Activity>, ApiError> {
    let mut activities = Vec::new();
    for process in processes {
        let mut batch = fetch_activities(process.id.clone()).await?;
        // Ответ может не содержать ссылку на процесс
        for activity in &mut batch {
            if activity.process_id.is_empty() {
                activity.process_id = process.id.clone();
            }
        }
        activities.append(&mut batch);
    }
    Ok(activities)
}
