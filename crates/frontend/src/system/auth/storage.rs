use contracts::system::auth::{LoginResponse, Role};
use web_sys::window;

const TOKEN_KEY: &str = "token";
const USER_ROLE_KEY: &str = "userRole";
const USER_UNIQUE_ID_KEY: &str = "userUniqueID";

/// The client-persisted token/role/identifier triple representing an
/// authenticated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub token: String,
    pub role: Role,
    pub unique_id: String,
}

impl SessionRecord {
    /// Build a session record from a login response.
    ///
    /// Returns `None` when the response carries no token; nothing is
    /// persisted in that case even if the login otherwise succeeded.
    pub fn from_response(role: Role, response: &LoginResponse) -> Option<Self> {
        let token = response.token.clone()?;
        Some(Self {
            token,
            role,
            unique_id: response.unique_id().unwrap_or_default().to_string(),
        })
    }
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the session record, overwriting any previous one
pub fn save_session(record: &SessionRecord) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, &record.token);
        let _ = storage.set_item(USER_ROLE_KEY, record.role.as_str());
        let _ = storage.set_item(USER_UNIQUE_ID_KEY, &record.unique_id);
    }
}

/// Get the persisted session token from localStorage
pub fn get_token() -> Option<String> {
    get_local_storage()?.get_item(TOKEN_KEY).ok()?
}

/// Clear the persisted session record
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_ROLE_KEY);
        let _ = storage.remove_item(USER_UNIQUE_ID_KEY);
    }
}
