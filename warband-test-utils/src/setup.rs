use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{
    error::TestError,
    fixtures::{DataFixtures, ProviderFixtures},
};

pub struct TestSetup {
    pub server: ServerGuard,
    pub db: DatabaseConnection,
    pub session: Session,
    pub mocks: Vec<Arc<Mock>>,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            server,
            db,
            session,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock provider server; point the profile client here.
    pub fn provider_url(&self) -> String {
        self.server.url()
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Mock provider endpoint helpers.
    pub fn provider(&mut self) -> ProviderFixtures<'_> {
        ProviderFixtures { setup: self }
    }

    /// Database row factories.
    pub fn data(&self) -> DataFixtures<'_> {
        DataFixtures { setup: self }
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_user_tables {
    // Pattern 1: No extra entities provided
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::WarbandUser),
                schema.create_table_from_entity(entity::prelude::WarbandCharacter),
                schema.create_table_from_entity(entity::prelude::WarbandMainCharacter),
                schema.create_table_from_entity(entity::prelude::WarbandBattlenetLink),
                schema.create_table_from_entity(entity::prelude::WarbandDiscordLink),
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};

    // Pattern 2: Extra entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::WarbandUser),
                schema.create_table_from_entity(entity::prelude::WarbandCharacter),
                schema.create_table_from_entity(entity::prelude::WarbandMainCharacter),
                schema.create_table_from_entity(entity::prelude::WarbandBattlenetLink),
                schema.create_table_from_entity(entity::prelude::WarbandDiscordLink),
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
