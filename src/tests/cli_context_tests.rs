use crate::cli_context::{CliContext, CliContextBuilder};
use crate::constants::DEFAULT_API_URL;
use crate::error::AdminError;

#[test]
fn test_new_context_has_no_token() {
    let ctx = CliContext::new();
    assert!(!ctx.has_api_token());
    assert!(matches!(ctx.api_token(), Err(AdminError::ApiTokenNotFound)));
    assert_eq!(ctx.api_url(), DEFAULT_API_URL);
}

#[test]
fn test_verified_client_requires_token() {
    let mut ctx = CliContext::new();
    assert!(matches!(ctx.verified_client(), Err(AdminError::ApiTokenNotFound)));
}

#[test]
fn test_builder_with_token_ignores_saved_config() {
    let ctx = CliContextBuilder::new()
        .with_api_token("tok-123".to_string())
        .with_api_url("https://api.example.com/".to_string())
        .with_roles(vec!["parametrizations_writer".to_string()])
        .build();

    assert_eq!(ctx.api_token().unwrap(), "tok-123");
    assert_eq!(ctx.api_url(), "https://api.example.com/");
    assert!(ctx.roles().has_parametrizations_writer());
}

#[test]
fn test_verified_client_is_cached() {
    let mut ctx = CliContextBuilder::new()
        .with_api_token("tok-123".to_string())
        .with_api_url("https://api.example.com/".to_string())
        .build();

    let first = ctx.verified_client().unwrap();
    let second = ctx.verified_client().unwrap();
    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert_eq!(first.base_url(), "https://api.example.com");
}

#[test]
fn test_roles_default_to_reader() {
    let ctx = CliContextBuilder::new()
        .with_api_token("tok".to_string())
        .build();
    assert!(!ctx.roles().has_parametrizations_writer());
}

#[test]
fn test_parse_assignments() {
    use crate::commands::parse_assignments;

    let raw = vec!["name=Ana".to_string(), " cpf =123.456.789-00".to_string(), "note=a=b".to_string()];
    let pairs = parse_assignments(&raw).unwrap();
    assert_eq!(pairs[0], ("name".to_string(), "Ana".to_string()));
    assert_eq!(pairs[1], ("cpf".to_string(), "123.456.789-00".to_string()));
    assert_eq!(pairs[2], ("note".to_string(), "a=b".to_string()));

    let bad = vec!["name".to_string()];
    assert!(matches!(parse_assignments(&bad), Err(AdminError::InvalidInput(_))));
    let empty_key = vec!["=x".to_string()];
    assert!(parse_assignments(&empty_key).is_err());
}
