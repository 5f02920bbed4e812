//! Taskroom Bot console entry point.

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::io::BufReader;

use taskroom_bot::adapters::api::{HttpTaskApi, InMemoryTaskApi};
use taskroom_bot::adapters::console::run_console;
use taskroom_bot::application::DialogNavigator;
use taskroom_bot::config::AppConfig;
use taskroom_bot::domain::foundation::{OrderId, TaskId, UserId};
use taskroom_bot::domain::task::{ExecutorInfo, OrderInfo, TaskInfo};
use taskroom_bot::ports::TaskApi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    config.logging.init()?;

    let user_id = UserId::new(config.console.user_id);
    let api: Arc<dyn TaskApi> = match config.api.http_config() {
        Some(http) => {
            tracing::info!(base_url = %http.base_url, "using task service");
            Arc::new(HttpTaskApi::new(http)?)
        }
        None => {
            tracing::warn!("no task service configured, using in-memory demo data");
            Arc::new(demo_api(user_id).await)
        }
    };

    let mut navigator = DialogNavigator::new(api, user_id);
    run_console(
        &mut navigator,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;

    Ok(())
}

/// In-memory API with one task the console user can open with `/task 1`.
async fn demo_api(user_id: UserId) -> InMemoryTaskApi {
    let api = InMemoryTaskApi::new();
    let order_id = OrderId::new(1);
    api.seed_task(TaskInfo {
        id: TaskId::new(1),
        name: "Take out the trash".to_string(),
        description: "Bins go out on Monday evening".to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(19, 0, 0))
            .unwrap_or_default(),
        period: 7,
        order_id: Some(order_id),
    })
    .await;
    api.seed_order(
        order_id,
        OrderInfo {
            users: vec![ExecutorInfo {
                id: user_id,
                fullname: "Console User".to_string(),
            }],
        },
    )
    .await;
    api
}
