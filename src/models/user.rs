use serde::Deserialize;

/// Identity resolved by the authentication middleware. Roles are `admin`
/// and `user`; anything other than `user` counts as elevated.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}

impl User {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_elevated(&self) -> bool {
        self.role != "user"
    }
}
