use once_cell::sync::{Lazy, OnceCell};

use nyaya_db::SqlitePool;

use crate::index::{make_engine, IndexEngine};

#[derive(Debug)]
pub struct Services {
    db_pool: SqlitePool,
}

impl Services {
    pub fn db(&self) -> &SqlitePool {
        &self.db_pool
    }

    pub fn index_engine(&self) -> &'static dyn IndexEngine {
        &**INDEX_ENGINE
    }
}

/// Global relevance engine instance shared across the server.
static INDEX_ENGINE: Lazy<Box<dyn IndexEngine>> = Lazy::new(|| {
    // prefer on-disk Tantivy when NYAYA_INDEX_DIR is set, else fall back to in-memory engine
    if let Ok(dir) = std::env::var("NYAYA_INDEX_DIR") {
        let path = dir.trim();
        if !path.is_empty() {
            match nyaya_index::tantivy::TantivyIndexEngine::open_or_create_in_dir(path) {
                Ok(engine) => {
                    eprintln!("[index] using Tantivy on-disk index at {}", path);
                    return Box::new(engine);
                }
                Err(e) => {
                    eprintln!(
                        "[index] failed to open Tantivy index at {}: {:?} ; falling back to in-memory",
                        path, e
                    );
                }
            }
        }
    }
    make_engine("tantivy")
        .or_else(|_| make_engine("noop"))
        .expect("index engine")
});

static SERVICES: OnceCell<Services> = OnceCell::new();

pub fn init(db_pool: SqlitePool) {
    SERVICES
        .set(Services { db_pool })
        .expect("services already initialized");
}

pub fn services() -> &'static Services {
    SERVICES.get().expect("services not initialized")
}

pub fn db() -> &'static SqlitePool {
    services().db()
}

/// Obtain a reference to the global relevance engine.
pub fn index_engine() -> &'static dyn IndexEngine {
    &**INDEX_ENGINE
}
