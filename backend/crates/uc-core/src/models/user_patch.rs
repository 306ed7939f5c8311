use crate::User;

/// Partial update for an existing user. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserPatch {
    /// Copy the present fields onto `user`. Returns true if anything changed.
    pub fn apply_to(self, user: &mut User) -> bool {
        let mut changed = false;

        if let Some(name) = self.name
            && name != user.name
        {
            user.name = name;
            changed = true;
        }

        if let Some(email) = self.email
            && email != user.email
        {
            user.email = email;
            changed = true;
        }

        changed
    }
}
