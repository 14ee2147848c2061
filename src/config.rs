pub struct Config {
    pub database_url: String,
}

impl Config {
    pub fn new() -> Self {
        dotenvy::dotenv().ok();
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        Self { database_url }
    }

    pub fn new_database_url(database_url: String) -> Self {
        Self { database_url }
    }
}
