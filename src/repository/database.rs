use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::config::Config;
use crate::models::todo::{Todo, TodoPayload};
use crate::repository::schema::todos::dsl::*;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

type DBPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

#[derive(Debug, Clone)]
pub struct Database {
    pool: DBPool,
}

impl Database {
    pub fn new(config: &Config) -> Self {
        let mut conn = SqliteConnection::establish(&config.database_url)
            .expect("Failed to open the database.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Failed to run pending migrations.");
        let manager = ConnectionManager::<SqliteConnection>::new(&config.database_url);
        let pool: DBPool = r2d2::Pool::builder()
            .build(manager)
            .expect("Failed to create pool.");
        Database { pool }
    }

    pub fn get_todos(&self) -> Result<Vec<Todo>, anyhow::Error> {
        let mut conn = self.pool.get()?;
        let all_todos = conn.transaction(|conn| todos.load::<Todo>(conn))?;
        Ok(all_todos)
    }

    pub fn get_todo_by_id(&self, todo_id: i32) -> Result<Option<Todo>, anyhow::Error> {
        let mut conn = self.pool.get()?;
        let todo = conn.transaction(|conn| todos.find(todo_id).first::<Todo>(conn).optional())?;
        Ok(todo)
    }

    pub fn create_todo(&self, payload: TodoPayload) -> Result<Todo, anyhow::Error> {
        let mut conn = self.pool.get()?;
        let todo = conn.transaction(|conn| {
            diesel::insert_into(todos)
                .values(&payload)
                .get_result::<Todo>(conn)
        })?;
        Ok(todo)
    }

    pub fn update_todo_by_id(
        &self,
        todo_id: i32,
        payload: TodoPayload,
    ) -> Result<Option<Todo>, anyhow::Error> {
        let mut conn = self.pool.get()?;
        let todo = conn.transaction(|conn| {
            diesel::update(todos.find(todo_id))
                .set(&payload)
                .get_result::<Todo>(conn)
                .optional()
        })?;
        Ok(todo)
    }

    pub fn delete_todo_by_id(&self, todo_id: i32) -> Result<Option<()>, anyhow::Error> {
        let mut conn = self.pool.get()?;
        let deleted = conn.transaction(|conn| diesel::delete(todos.find(todo_id)).execute(conn))?;
        Ok((deleted > 0).then_some(()))
    }
}
