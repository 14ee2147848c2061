use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = crate::repository::schema::todos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = crate::repository::schema::todos)]
pub struct TodoPayload {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct TodoResponse {
    pub message: String,
    pub todo: Todo,
}

#[derive(Serialize)]
pub struct TodoListResponse {
    pub todos: Vec<Todo>,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}
