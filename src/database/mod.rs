use mongodb::{Client, Collection, Database};
use std::error::Error;

/// Name of the single collection holding one document per account.
pub const USERDATA: &str = "Userdata";

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    /// Connect once at startup. The caller aborts the process on failure;
    /// every handler reuses this client for its lifetime.
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        // Test connection
        db.list_collection_names().await?;

        let mongodb = Self { db };
        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Unique indexes on Username and Email. The application still checks for
    /// duplicates before inserting, but check-then-insert is racy under
    /// concurrent signups; the index makes the invariant hold at the storage
    /// layer.
    async fn ensure_indexes(&self) -> Result<(), Box<dyn Error>> {
        use mongodb::bson::doc;
        use mongodb::options::IndexOptions;
        use mongodb::IndexModel;

        log::info!("Creating database indexes...");

        let userdata = self.db.collection::<mongodb::bson::Document>(USERDATA);

        let username_index = IndexModel::builder()
            .keys(doc! { "Username": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        match userdata.create_index(username_index).await {
            Ok(_) => log::info!("Index created: Userdata(Username) unique"),
            Err(e) => log::debug!("Index already exists: {}", e),
        }

        let email_index = IndexModel::builder()
            .keys(doc! { "Email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        match userdata.create_index(email_index).await {
            Ok(_) => log::info!("Index created: Userdata(Email) unique"),
            Err(e) => log::debug!("Index already exists: {}", e),
        }

        log::info!("Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    /// Round-trips a cheap command to the server; the health endpoint reports
    /// a degraded status when this fails.
    pub async fn health_check(&self) -> Result<(), Box<dyn Error>> {
        self.db.list_collection_names().await?;
        Ok(())
    }
}
