//! Read-mostly auth context shared by the shell and the pages.

use std::rc::Rc;

use common::model::user::User;
use yew::Callback;

#[derive(Clone, PartialEq)]
pub struct AuthContext {
    pub user: Rc<User>,
    pub logout: Callback<()>,
}

impl AuthContext {
    pub fn is_admin(&self) -> bool {
        self.user.is_admin()
    }
}
