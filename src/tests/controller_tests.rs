use serde_json::json;

use super::mock::{company_json, team_json, user_json, MockApi, Reply};
use crate::auth::AuthRoles;
use crate::edit::{CloseSignal, EditController, EditPhase, FormView};
use crate::entities::{EntityKind, COMPANIES, TEAMS, USERS};
use crate::feedback::{Loader, ToastCenter, ToastKind};

async fn opened(entity: EntityKind, api: &MockApi, toasts: &mut ToastCenter) -> EditController {
    let mut controller = EditController::new(entity.descriptor());
    assert!(controller.open("rec-1"));
    assert_eq!(controller.fetch(api, toasts).await, None);
    controller
}

async fn editing_user(api: &MockApi, toasts: &mut ToastCenter) -> EditController {
    let mut controller = opened(EntityKind::Users, api, toasts).await;
    assert!(controller.toggle_read_only(&AuthRoles::writer()));
    controller
}

#[tokio::test]
async fn test_open_issues_exactly_one_fetch_for_every_entity() {
    for (kind, record) in [
        (EntityKind::Companies, company_json()),
        (EntityKind::Users, user_json()),
        (EntityKind::Teams, team_json()),
    ] {
        let api = MockApi::new().on_get(Reply::data(record));
        let mut toasts = ToastCenter::new();
        let mut controller = EditController::new(kind.descriptor());

        assert!(!controller.is_visible());
        assert!(controller.open("rec-1"));
        assert!(controller.is_visible());
        assert_eq!(controller.phase(), EditPhase::Loading);
        assert!(matches!(controller.form().view(), FormView::Skeleton));

        assert_eq!(controller.fetch(&api, &mut toasts).await, None);
        assert_eq!(controller.phase(), EditPhase::Viewing);
        assert!(controller.is_read_only());

        let calls = api.calls();
        assert_eq!(calls.len(), 1, "{}", kind);
        assert_eq!(calls[0].method, "GET");
        assert_eq!(calls[0].path, format!("/parametrizations/{}/rec-1", kind));
        assert!(toasts.is_empty());
    }
}

#[tokio::test]
async fn test_open_with_empty_uuid_is_ignored() {
    let mut controller = EditController::new(&COMPANIES);
    assert!(!controller.open(""));
    assert!(!controller.open("   "));
    assert_eq!(controller.phase(), EditPhase::Closed);
}

#[tokio::test]
async fn test_fetch_masks_display_fields() {
    let api = MockApi::new().on_get(Reply::data(company_json()));
    let mut toasts = ToastCenter::new();
    let controller = opened(EntityKind::Companies, &api, &mut toasts).await;

    let values = controller.form().values().unwrap();
    assert_eq!(values.get("companyCnpj"), "12.345.678/0001-95");
    assert_eq!(values.get("zipCode"), "01310-100");
    assert_eq!(values.get("status"), "active");
    assert!(!controller.form().is_dirty());
}

#[tokio::test]
async fn test_failed_fetch_closes_and_signals_no_changes() {
    let api = MockApi::new().on_get(Reply::Fail("connection refused".to_string()));
    let mut toasts = ToastCenter::new();
    let mut controller = EditController::new(&USERS);
    controller.open("u-1");

    let signal = controller.fetch(&api, &mut toasts).await;

    assert_eq!(signal, Some(CloseSignal { has_changes: false }));
    assert_eq!(controller.phase(), EditPhase::Closed);
    assert!(!controller.is_visible());
    assert!(controller.form().values().is_none());
    assert_eq!(toasts.count(ToastKind::Error), 1);
}

#[tokio::test]
async fn test_fetch_without_data_is_a_rejection() {
    let api = MockApi::new().on_get(Reply::message("registro não encontrado"));
    let mut toasts = ToastCenter::new();
    let mut controller = EditController::new(&TEAMS);
    controller.open("t-1");

    let signal = controller.fetch(&api, &mut toasts).await;

    assert_eq!(signal, Some(CloseSignal { has_changes: false }));
    assert_eq!(toasts.count(ToastKind::Error), 1);
}

#[tokio::test]
async fn test_fetch_with_unexpected_shape_closes() {
    let api = MockApi::new().on_get(Reply::data(json!({ "unexpected": true })));
    let mut toasts = ToastCenter::new();
    let mut controller = EditController::new(&COMPANIES);
    controller.open("c-1");

    assert_eq!(
        controller.fetch(&api, &mut toasts).await,
        Some(CloseSignal { has_changes: false })
    );
    assert!(!controller.is_visible());
}

#[tokio::test]
async fn test_read_only_toggle_requires_writer_role() {
    let api = MockApi::new().on_get(Reply::data(team_json()));
    let mut toasts = ToastCenter::new();
    let mut controller = opened(EntityKind::Teams, &api, &mut toasts).await;

    assert!(!controller.can_toggle(&AuthRoles::reader()));
    assert!(!controller.toggle_read_only(&AuthRoles::reader()));
    assert!(controller.is_read_only());
    assert_eq!(controller.toggle_label(), "Alterar");

    assert!(controller.toggle_read_only(&AuthRoles::writer()));
    assert!(!controller.is_read_only());
    assert_eq!(controller.phase(), EditPhase::Editing);
    assert_eq!(controller.toggle_label(), "Alterando...");

    // Only unlocks; a second press does nothing.
    assert!(!controller.toggle_read_only(&AuthRoles::writer()));
    assert!(!controller.is_read_only());
}

#[tokio::test]
async fn test_toggle_is_disabled_before_values_arrive() {
    let mut controller = EditController::new(&TEAMS);
    controller.open("t-1");
    assert!(!controller.toggle_read_only(&AuthRoles::writer()));
    assert_eq!(controller.phase(), EditPhase::Loading);
}

#[tokio::test]
async fn test_submit_is_unreachable_when_pristine_or_invalid() {
    let api = MockApi::new()
        .on_get(Reply::data(user_json()))
        .on_put(Reply::data(json!({ "uuid": "rec-1" })));
    let mut toasts = ToastCenter::new();
    let loader = Loader::new();
    let mut controller = editing_user(&api, &mut toasts).await;

    assert!(!controller.form().can_submit());
    assert!(controller.submit(&api, &mut toasts, &loader).await.is_err());

    controller.form_mut().set_value("email", "not-an-email").unwrap();
    assert!(controller.form().is_dirty());
    assert!(!controller.form().can_submit());
    assert!(controller.submit(&api, &mut toasts, &loader).await.is_err());

    assert_eq!(api.count("PUT"), 0);
    assert_eq!(controller.phase(), EditPhase::Editing);
}

#[tokio::test]
async fn test_submit_while_read_only_is_refused() {
    let api = MockApi::new().on_get(Reply::data(team_json()));
    let mut toasts = ToastCenter::new();
    let loader = Loader::new();
    let mut controller = opened(EntityKind::Teams, &api, &mut toasts).await;

    assert!(controller.submit(&api, &mut toasts, &loader).await.is_err());
    assert_eq!(api.count("PUT"), 0);
}

#[tokio::test]
async fn test_successful_submit_unmasks_closes_and_toasts_once() {
    let api = MockApi::new()
        .on_get(Reply::data(user_json()))
        .on_put(Reply::data(json!({ "uuid": "rec-1" })));
    let mut toasts = ToastCenter::new();
    let loader = Loader::new();
    let mut controller = editing_user(&api, &mut toasts).await;

    controller.form_mut().set_value("cpf", "123.456.789-01").unwrap();
    let signal = controller.submit(&api, &mut toasts, &loader).await.unwrap();

    assert_eq!(signal, Some(CloseSignal { has_changes: true }));
    assert_eq!(controller.phase(), EditPhase::Closed);
    assert!(controller.form().values().is_none());
    assert_eq!(toasts.count(ToastKind::Success), 1);
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts.last().unwrap().description, "O cadastro do Usuário foi editado.");
    assert!(!loader.is_visible());

    let put = api.last_put().unwrap();
    assert_eq!(put.path, "/parametrizations/users/rec-1");
    let body = put.body.unwrap();
    assert_eq!(body["cpf"], "12345678901");
    assert_eq!(body["uuid"], "rec-1");
    assert_eq!(body["admissionDate"], "2023-02-01");
}

#[tokio::test]
async fn test_company_submit_unmasks_cnpj_and_zip_code() {
    let api = MockApi::new()
        .on_get(Reply::data(company_json()))
        .on_put(Reply::data(json!({ "ok": true })));
    let mut toasts = ToastCenter::new();
    let loader = Loader::new();
    let mut controller = opened(EntityKind::Companies, &api, &mut toasts).await;
    controller.toggle_read_only(&AuthRoles::writer());

    controller.form_mut().set_value("city", "Campinas").unwrap();
    controller.submit(&api, &mut toasts, &loader).await.unwrap();

    let body = api.last_put().unwrap().body.unwrap();
    assert_eq!(body["companyCnpj"], "12345678000195");
    assert_eq!(body["zipCode"], "01310100");
    assert_eq!(body["city"], "Campinas");
    assert_eq!(body["complement"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_business_rejection_keeps_modal_open() {
    let api = MockApi::new()
        .on_get(Reply::data(user_json()))
        .on_put(Reply::Envelope(crate::client::ApiEnvelope {
            data: Some(serde_json::Value::Null),
            message: Some("quota exceeded".to_string()),
        }));
    let mut toasts = ToastCenter::new();
    let loader = Loader::new();
    let mut controller = editing_user(&api, &mut toasts).await;

    controller.form_mut().set_value("position", "Coordenadora").unwrap();
    let signal = controller.submit(&api, &mut toasts, &loader).await.unwrap();

    assert_eq!(signal, None);
    assert!(controller.is_visible());
    assert_eq!(controller.phase(), EditPhase::Editing);
    assert_eq!(toasts.count(ToastKind::Warning), 1);
    assert_eq!(toasts.count(ToastKind::Success), 0);
    assert_eq!(toasts.last().unwrap().description, "quota exceeded");
    assert_eq!(controller.form().values().unwrap().get("position"), "Coordenadora");
    assert!(!loader.is_visible());
}

#[tokio::test]
async fn test_transport_failure_on_submit_keeps_modal_open() {
    let api = MockApi::new()
        .on_get(Reply::data(team_json()))
        .on_put(Reply::Fail("timeout".to_string()));
    let mut toasts = ToastCenter::new();
    let loader = Loader::new();
    let mut controller = opened(EntityKind::Teams, &api, &mut toasts).await;
    controller.toggle_read_only(&AuthRoles::writer());
    controller.form_mut().set_value("name", "Plantão Noturno").unwrap();

    let signal = controller.submit(&api, &mut toasts, &loader).await.unwrap();

    assert_eq!(signal, None);
    assert_eq!(controller.phase(), EditPhase::Editing);
    assert_eq!(toasts.count(ToastKind::Error), 1);
    assert!(!loader.is_visible());
}

#[tokio::test]
async fn test_cancel_on_dirty_form_needs_confirmation() {
    let api = MockApi::new().on_get(Reply::data(team_json()));
    let mut toasts = ToastCenter::new();
    let mut controller = opened(EntityKind::Teams, &api, &mut toasts).await;
    controller.toggle_read_only(&AuthRoles::writer());

    controller.form_mut().set_value("name", "Outra").unwrap();
    assert_eq!(controller.request_cancel(), None);
    assert!(controller.is_visible());

    assert_eq!(controller.cancel(), CloseSignal { has_changes: false });
    assert!(!controller.is_visible());
}

#[tokio::test]
async fn test_cancel_on_pristine_form_closes_immediately() {
    let api = MockApi::new().on_get(Reply::data(team_json()));
    let mut toasts = ToastCenter::new();
    let mut controller = opened(EntityKind::Teams, &api, &mut toasts).await;

    assert_eq!(controller.request_cancel(), Some(CloseSignal { has_changes: false }));
    assert_eq!(controller.phase(), EditPhase::Closed);
    assert_eq!(api.count("PUT"), 0);
}

#[tokio::test]
async fn test_reopen_fetches_again() {
    let api = MockApi::new().on_get(Reply::data(team_json()));
    let mut toasts = ToastCenter::new();
    let mut controller = opened(EntityKind::Teams, &api, &mut toasts).await;
    controller.cancel();

    controller.open("rec-1");
    assert!(matches!(controller.form().view(), FormView::Skeleton));
    controller.fetch(&api, &mut toasts).await;
    assert_eq!(api.count("GET"), 2);
}
