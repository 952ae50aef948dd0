use crate::models::User;

/// Lista de usuarios de la vista admin
#[derive(Default, Debug)]
pub struct AdminViewModel {
    users: Vec<User>,
}

impl AdminViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_users(&mut self, users: Vec<User>) {
        self.users = users;
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn admin_count(&self) -> usize {
        self.users.iter().filter(|u| u.role == crate::utils::constants::ADMIN_ROLE).count()
    }
}
