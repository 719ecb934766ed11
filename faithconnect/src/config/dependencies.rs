//! Dependency initialization and wiring for the social graph services.

use std::env;
use std::sync::Arc;

use dotenv::dotenv;
use tracing::info;

use faithconnect_repository::{
    ContentRepository, EngagementRepository, FollowRepository, MessageRepository,
    NotificationRepository, PostgresContentRepository, PostgresEngagementRepository,
    PostgresFollowRepository, PostgresMessageRepository, PostgresNotificationRepository,
    PostgresUserRepository, UserRepository, postgres,
};
use faithconnect_social::{
    ContentService, DirectoryService, EngagementService, FollowService, MessagingService,
    NotificationService,
};

use crate::errors::AppError;

/// Default size of the PostgreSQL connection pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Container for the initialized service stack.
///
/// The embedding HTTP layer holds one of these for the process lifetime
/// and maps its routes onto the services one-to-one.
pub struct Dependencies {
    pub directory: Arc<DirectoryService>,
    pub follows: Arc<FollowService>,
    pub engagement: Arc<EngagementService>,
    pub content: Arc<ContentService>,
    pub messaging: Arc<MessagingService>,
    pub notifications: Arc<NotificationService>,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `DATABASE_URL`: PostgreSQL connection string (required)
    /// - `DATABASE_MAX_CONNECTIONS`: pool size (default: 20)
    /// - `DATABASE_RUN_MIGRATIONS`: apply embedded migrations on startup,
    ///   "true" or "false" (default: true)
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized service stack
    /// * `Err(AppError)` - Missing configuration or connection failure
    pub async fn new() -> Result<Self, AppError> {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| AppError::config("DATABASE_URL must be set"))?;
        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);
        let run_migrations = env::var("DATABASE_RUN_MIGRATIONS")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);

        info!(
            max_connections,
            run_migrations, "Connecting to PostgreSQL"
        );

        let pool = postgres::connect_pool(&database_url, max_connections).await?;

        if run_migrations {
            postgres::run_migrations(&pool).await?;
            info!("Schema migrations applied");
        }

        Ok(Self::from_pool(pool))
    }

    /// Wires repositories and services over an existing pool.
    pub fn from_pool(pool: sqlx::PgPool) -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
        let follows: Arc<dyn FollowRepository> =
            Arc::new(PostgresFollowRepository::new(pool.clone()));
        let content: Arc<dyn ContentRepository> =
            Arc::new(PostgresContentRepository::new(pool.clone()));
        let engagement: Arc<dyn EngagementRepository> =
            Arc::new(PostgresEngagementRepository::new(pool.clone()));
        let messages: Arc<dyn MessageRepository> =
            Arc::new(PostgresMessageRepository::new(pool.clone()));
        let notifications_repo: Arc<dyn NotificationRepository> =
            Arc::new(PostgresNotificationRepository::new(pool));

        let notifications = Arc::new(NotificationService::new(
            notifications_repo,
            users.clone(),
        ));

        Self {
            directory: Arc::new(DirectoryService::new(users.clone())),
            follows: Arc::new(FollowService::new(
                users.clone(),
                follows.clone(),
                notifications.clone(),
            )),
            engagement: Arc::new(EngagementService::new(
                engagement,
                content.clone(),
                notifications.clone(),
            )),
            content: Arc::new(ContentService::new(content, notifications.clone())),
            messaging: Arc::new(MessagingService::new(
                messages,
                users,
                follows,
                notifications.clone(),
            )),
            notifications,
        }
    }
}
