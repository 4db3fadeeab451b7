//! User Service Library
//!
//! Persistence and business rules for the `users` table: SeaORM entity,
//! schema migrations, repository and service layers. The HTTP crate wires
//! these behind its routes.

pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use common::DatabaseConfig;

use crate::infra::Database;
use crate::repository::UserStore;
use crate::service::{UserManager, UserService};

/// Connect to the database, apply the schema and build the user service.
pub async fn bootstrap(
    config: &DatabaseConfig,
) -> Result<(Database, Arc<dyn UserService>), sea_orm::DbErr> {
    let db = Database::connect(config).await?;

    let user_repo = Arc::new(UserStore::new(db.get_connection()));
    let user_service: Arc<dyn UserService> = Arc::new(UserManager::new(user_repo));

    Ok((db, user_service))
}
