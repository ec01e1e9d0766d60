// tests/common/mod.rs
use serde_json::{json, Value};

pub const HOME_ACCOUNT_ID: &str = "uid.utid";
pub const ENVIRONMENT: &str = "login.microsoftonline.com";
pub const REALM: &str = "utid";
pub const CLIENT_ID: &str = "mock_client_id";

pub fn account_record() -> Value {
    json!({
        "home_account_id": HOME_ACCOUNT_ID,
        "environment": ENVIRONMENT,
        "realm": REALM,
        "local_account_id": "object1234",
        "username": "John Doe",
        "authority_type": "MSSTS",
        "client_info": "base64encodedjson"
    })
}

pub fn id_token_record() -> Value {
    json!({
        "home_account_id": HOME_ACCOUNT_ID,
        "environment": ENVIRONMENT,
        "credential_type": "IdToken",
        "client_id": CLIENT_ID,
        "secret": "header.eyJvaWQiOiAib2JqZWN0MTIzNCJ9.signature",
        "realm": REALM
    })
}

pub fn access_token_record() -> Value {
    json!({
        "home_account_id": HOME_ACCOUNT_ID,
        "environment": ENVIRONMENT,
        "credential_type": "AccessToken",
        "client_id": CLIENT_ID,
        "secret": "an access token",
        "realm": REALM,
        "target": "scope1 scope2 scope3",
        "cached_at": "1000",
        "expires_on": "4600",
        "extended_expires_on": "4600",
        "token_type": "Bearer"
    })
}

pub fn refresh_token_record() -> Value {
    json!({
        "home_account_id": HOME_ACCOUNT_ID,
        "environment": ENVIRONMENT,
        "credential_type": "RefreshToken",
        "client_id": CLIENT_ID,
        "secret": "a refresh token"
    })
}

pub fn app_metadata_record() -> Value {
    json!({
        "client_id": CLIENT_ID,
        "environment": ENVIRONMENT,
        "family_id": "1"
    })
}

/// A complete cache document with one record per section, in wire format.
pub fn cache_document() -> String {
    json!({
        "Account": {
            "uid.utid-login.microsoftonline.com-utid": account_record().to_string()
        },
        "IdToken": {
            "uid.utid-login.microsoftonline.com-idtoken-mock_client_id-utid-": id_token_record().to_string()
        },
        "AccessToken": {
            "uid.utid-login.microsoftonline.com-accesstoken-mock_client_id-utid-scope1 scope2 scope3": access_token_record().to_string()
        },
        "RefreshToken": {
            "uid.utid-login.microsoftonline.com-refreshtoken-mock_client_id--": refresh_token_record().to_string()
        },
        "AppMetadata": {
            "appmetadata-login.microsoftonline.com-mock_client_id": app_metadata_record().to_string()
        }
    })
    .to_string()
}
