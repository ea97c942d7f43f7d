use super::mock::{MockApi, Reply};
use crate::edit::EditController;
use crate::entities::TEAMS;
use crate::feedback::ToastCenter;
use crate::logging::{get_log_file_path, init_logging};

#[tokio::test]
async fn test_failed_fetch_is_written_to_the_log() {
    init_logging().unwrap();
    let path = get_log_file_path().unwrap();

    let api = MockApi::new().on_get(Reply::Fail("connection refused".to_string()));
    let mut toasts = ToastCenter::new();
    let mut controller = EditController::new(&TEAMS);
    controller.open("t-log");
    controller.fetch(&api, &mut toasts).await;

    let contents = std::fs::read_to_string(path).unwrap();
    assert!(contents.contains("WARN - Fetch of teams t-log failed"));
    assert!(contents.contains("Closing teams Some(\"t-log\") (has_changes: false)"));
}
