use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::{json, Value};

use super::mock::{company_json, MockApi, Reply};
use crate::auth::AuthRoles;
use crate::edit::EditPhase;
use crate::entities::EntityKind;
use crate::feedback::ToastKind;
use crate::interactive::app::{InteractiveApp, PendingOp, Popup};
use crate::interactive::keys::{map_key, Action};

fn companies() -> Value {
    json!([
        { "uuid": "c-1", "companyName": "Acme Saúde", "status": "active" },
        { "uuid": "c-2", "companyName": "Beta Clínicas", "status": "inactive" }
    ])
}

async fn loaded_app(auth: AuthRoles) -> (InteractiveApp, Arc<MockApi>) {
    let api = Arc::new(MockApi::new().on_get(Reply::data(companies())));
    let mut app = InteractiveApp::new(api.clone(), auth);
    assert_eq!(app.pending, Some(PendingOp::Refresh));
    app.run_pending().await;
    assert_eq!(app.rows.len(), 2);
    (app, api)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_list_keys() {
    assert_eq!(map_key(key(KeyCode::Char('j')), None, None), Action::MoveDown);
    assert_eq!(map_key(key(KeyCode::Enter), None, None), Action::OpenDetail);
    assert_eq!(map_key(key(KeyCode::Char('s')), None, None), Action::ToggleStatus);
    assert_eq!(map_key(key(KeyCode::Tab), None, None), Action::NextTab);
    assert_eq!(map_key(key(KeyCode::Char('q')), None, None), Action::Quit);
}

#[test]
fn test_edit_keys_depend_on_phase() {
    let popup = Some(Popup::Edit);
    assert_eq!(map_key(key(KeyCode::Char('e')), popup, Some(EditPhase::Viewing)), Action::Unlock);
    assert_eq!(
        map_key(key(KeyCode::Char('e')), popup, Some(EditPhase::Editing)),
        Action::TypeChar('e')
    );
    assert_eq!(map_key(key(KeyCode::Backspace), popup, Some(EditPhase::Viewing)), Action::None);
    assert_eq!(
        map_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL), popup, Some(EditPhase::Editing)),
        Action::Save
    );
    assert_eq!(map_key(key(KeyCode::Esc), popup, Some(EditPhase::Editing)), Action::Cancel);
}

#[test]
fn test_confirm_keys() {
    let popup = Some(Popup::ConfirmCancel);
    assert_eq!(map_key(key(KeyCode::Char('y')), popup, None), Action::ConfirmYes);
    assert_eq!(map_key(key(KeyCode::Esc), popup, None), Action::ConfirmNo);
}

#[tokio::test]
async fn test_selection_wraps() {
    let (mut app, _api) = loaded_app(AuthRoles::reader()).await;
    app.handle_action(Action::MoveUp);
    assert_eq!(app.selected_index, 1);
    app.handle_action(Action::MoveDown);
    assert_eq!(app.selected_index, 0);
}

#[tokio::test]
async fn test_input_is_ignored_while_a_call_is_pending() {
    let api = Arc::new(MockApi::new().on_get(Reply::data(companies())));
    let mut app = InteractiveApp::new(api, AuthRoles::reader());
    app.handle_action(Action::Help);
    assert_eq!(app.popup, None);
    app.handle_action(Action::Quit);
    assert!(app.should_quit);
}

#[tokio::test]
async fn test_switching_tabs_refetches() {
    let (mut app, api) = loaded_app(AuthRoles::reader()).await;
    api.set_get(Reply::data(json!([])));
    app.handle_action(Action::NextTab);
    assert_eq!(app.tab, EntityKind::Users);
    assert!(app.rows.is_empty());
    app.run_pending().await;
    assert_eq!(api.calls().last().unwrap().path, "/parametrizations/users");
}

#[tokio::test]
async fn test_edit_round_trip_refreshes_list() {
    let (mut app, api) = loaded_app(AuthRoles::writer()).await;

    api.set_get(Reply::data(company_json()));
    app.handle_action(Action::OpenDetail);
    assert_eq!(app.popup, Some(Popup::Edit));
    assert_eq!(app.pending, Some(PendingOp::FetchRecord));
    app.run_pending().await;
    assert_eq!(app.editor.as_ref().unwrap().phase(), EditPhase::Viewing);

    // Saving before unlocking queues nothing.
    app.handle_action(Action::Save);
    assert_eq!(app.pending, None);

    app.handle_action(Action::Unlock);
    let editor = app.editor.as_mut().unwrap();
    assert_eq!(editor.phase(), EditPhase::Editing);
    editor.form_mut().set_value("city", "Campinas").unwrap();

    api.set_get(Reply::data(companies()));
    api.set_put(Reply::data(json!({ "uuid": "c-1" })));

    app.handle_action(Action::Save);
    assert_eq!(app.pending, Some(PendingOp::SubmitRecord));
    app.run_pending().await;

    assert!(app.editor.is_none());
    assert_eq!(app.popup, None);
    assert_eq!(app.toasts.count(ToastKind::Success), 1);
    assert_eq!(app.pending, Some(PendingOp::Refresh));
    app.run_pending().await;
    assert_eq!(api.count("PUT"), 1);
}

#[tokio::test]
async fn test_dirty_cancel_asks_for_confirmation() {
    let (mut app, api) = loaded_app(AuthRoles::writer()).await;
    api.set_get(Reply::data(company_json()));
    app.handle_action(Action::OpenDetail);
    app.run_pending().await;
    app.handle_action(Action::Unlock);
    app.editor
        .as_mut()
        .unwrap()
        .form_mut()
        .set_value("city", "Campinas")
        .unwrap();

    app.handle_action(Action::Cancel);
    assert_eq!(app.popup, Some(Popup::ConfirmCancel));

    app.handle_action(Action::ConfirmNo);
    assert_eq!(app.popup, Some(Popup::Edit));

    app.handle_action(Action::Cancel);
    app.handle_action(Action::ConfirmYes);
    assert!(app.editor.is_none());
    assert_eq!(app.popup, None);
    assert_eq!(app.pending, None);
    assert_eq!(api.count("PUT"), 0);
}

#[tokio::test]
async fn test_failed_fetch_closes_editor() {
    let (mut app, api) = loaded_app(AuthRoles::writer()).await;
    api.set_get(Reply::Fail("timeout".to_string()));
    app.handle_action(Action::OpenDetail);
    app.run_pending().await;

    assert!(app.editor.is_none());
    assert_eq!(app.popup, None);
    assert_eq!(app.pending, None);
    assert_eq!(app.toasts.count(ToastKind::Error), 1);
}

#[tokio::test]
async fn test_toggle_status_from_row_refreshes() {
    let (mut app, api) = loaded_app(AuthRoles::writer()).await;
    api.set_put(Reply::data(json!({ "uuid": "c-1" })));

    app.handle_action(Action::ToggleStatus);
    assert_eq!(app.pending, Some(PendingOp::ToggleStatus("c-1".to_string())));
    app.run_pending().await;

    assert_eq!(api.last_put().unwrap().body.unwrap(), json!({ "status": "inactive" }));
    assert_eq!(api.count("GET"), 2);
    assert_eq!(app.toasts.count(ToastKind::Success), 1);
}

#[tokio::test]
async fn test_reader_cannot_toggle_from_row() {
    let (mut app, api) = loaded_app(AuthRoles::reader()).await;
    app.handle_action(Action::ToggleStatus);
    assert_eq!(app.pending, None);
    assert_eq!(api.count("PUT"), 0);
}

#[tokio::test]
async fn test_assignments_are_handed_to_the_parent() {
    let api = Arc::new(MockApi::new().on_get(Reply::data(json!([
        { "uuid": "u-1", "name": "Ana", "status": "active" }
    ]))));
    let mut app = InteractiveApp::new(api.clone(), AuthRoles::writer());
    app.tab = EntityKind::Users;
    app.run_pending().await;

    app.handle_action(Action::AssignTeam);
    let toast = app.toasts.last().unwrap();
    assert_eq!(toast.kind, ToastKind::Info);
    assert_eq!(toast.title, "Atribuir Equipe");
    assert_eq!(toast.description, "Ana");
    assert_eq!(api.count("PUT"), 0);
}

#[tokio::test]
async fn test_failed_refresh_sets_error_message() {
    let api = Arc::new(MockApi::new().on_get(Reply::message("sem permissão")));
    let mut app = InteractiveApp::new(api, AuthRoles::reader());
    app.run_pending().await;
    assert!(app.rows.is_empty());
    assert!(app.error_message.is_some());
    assert_eq!(app.toasts.count(ToastKind::Error), 1);
}
