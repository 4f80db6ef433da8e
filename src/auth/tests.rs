//! Tests for the auth module

use super::*;
use crate::Error;
use test_case::test_case;

#[test]
fn test_api_key_query() {
    let auth = Authenticator::new(Credential::api_key("secret123"));

    let client = reqwest::Client::new();
    let req = client.get("https://example.com/3/movie/popular");
    let built = auth.apply(req).build().unwrap();

    assert_eq!(built.url().query(), Some("api_key=secret123"));
    assert!(built.headers().get("Authorization").is_none());
}

#[test]
fn test_api_key_keeps_existing_query() {
    let auth = Authenticator::new(Credential::api_key("secret123"));

    let client = reqwest::Client::new();
    let req = client
        .get("https://example.com/3/search/movie")
        .query(&[("query", "alien")]);
    let built = auth.apply(req).build().unwrap();

    let query = built.url().query().unwrap();
    assert!(query.contains("query=alien"));
    assert!(query.contains("api_key=secret123"));
}

#[test]
fn test_bearer_header() {
    let auth = Authenticator::new(Credential::bearer("my-token"));

    let client = reqwest::Client::new();
    let req = client.get("https://example.com/3/movie/popular");
    let built = auth.apply(req).build().unwrap();

    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        "Bearer my-token"
    );
    assert!(built.url().query().is_none());
}

#[test]
fn test_from_parts_api_key() {
    let cred = Credential::from_parts(Some("key".into()), None).unwrap();
    assert_eq!(cred, Credential::api_key("key"));
}

#[test]
fn test_from_parts_bearer() {
    let cred = Credential::from_parts(None, Some("tok".into())).unwrap();
    assert_eq!(cred, Credential::bearer("tok"));
}

#[test_case(None, None ; "neither")]
#[test_case(Some(""), None ; "empty key")]
#[test_case(None, Some("") ; "empty token")]
fn test_from_parts_missing(api_key: Option<&str>, token: Option<&str>) {
    let result = Credential::from_parts(api_key.map(String::from), token.map(String::from));
    assert!(matches!(result, Err(Error::MissingCredential)));
}

#[test]
fn test_from_parts_conflict() {
    let result = Credential::from_parts(Some("key".into()), Some("tok".into()));
    assert!(matches!(result, Err(Error::ConflictingCredentials)));
}

#[test]
fn test_credential_yaml_shape() {
    let cred: Credential = serde_yaml::from_str("api_key: abc").unwrap();
    assert_eq!(cred, Credential::api_key("abc"));

    let cred: Credential = serde_yaml::from_str("bearer_token: xyz").unwrap();
    assert_eq!(cred, Credential::bearer("xyz"));
}
