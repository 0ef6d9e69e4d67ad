use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use uuid::Uuid;

use super::models::{NewUserModel, UserModel};
use crate::modules::identity::domain::{User, UserRepository};
use crate::schema::users;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::{with_connection, Database};

pub struct UserRepositoryImpl {
    db: Arc<Database>,
}

impl UserRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Insert an account. Not part of the service API; accounts are
    /// provisioned by fixtures and operators.
    pub async fn provision(&self, user: NewUserModel) -> AppResult<User> {
        with_connection(&self.db, move |conn| {
            let saved: UserModel = diesel::insert_into(users::table)
                .values(&user)
                .returning(UserModel::as_returning())
                .get_result(conn)?;
            Ok(saved.into())
        })
        .await
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        with_connection(&self.db, move |conn| {
            let user = users::table
                .find(id)
                .select(UserModel::as_select())
                .first::<UserModel>(conn)
                .optional()?;
            Ok(user.map(User::from))
        })
        .await
    }
}
