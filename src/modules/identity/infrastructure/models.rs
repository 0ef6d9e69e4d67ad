use crate::modules::identity::domain::User;
use crate::schema::users;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

// For reading from database
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = users)]
pub struct UserModel {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
}

// For provisioning accounts (fixtures, admin tooling)
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = users)]
pub struct NewUserModel {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub is_staff: bool,
}

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            username: model.username,
            email: model.email,
            is_staff: model.is_staff,
            created_at: model.created_at,
        }
    }
}
