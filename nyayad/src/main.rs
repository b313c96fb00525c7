use nyayad::{proto, router, services, startup};

use anyhow::{Context, Result};
use dotenv::dotenv;
use nyaya_db::{Db, DbConfig};
use std::net::SocketAddr;
use tokio::{io::AsyncWriteExt, net::TcpListener};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    // Config via env:
    // NYAYA_ADDR (default 127.0.0.1:5000), DATABASE_URL, NYAYA_INDEX_DIR, ADMIN_PASSWORD
    let addr = std::env::var("NYAYA_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".to_string());

    let pool = {
        let db_cfg = DbConfig::from_env();
        eprintln!("[db] configuration loaded\n  url: {}", db_cfg.database_url);
        let db = Db::new(db_cfg);
        eprintln!("[db] initializing connection pool");
        db.init().await.with_context(|| "database init failed")?;
        db.get_pool()
            .await
            .with_context(|| "database pool acquisition failed")?
            .clone()
    };
    services::init(pool);
    eprintln!("[db] pool ready");

    // Populate the relevance index before accepting queries so the first
    // search sees the whole corpus.
    startup::reindex_all()
        .await
        .with_context(|| "startup reindex failed")?;

    let listener = TcpListener::bind(&addr).await?;
    eprintln!("nyayad listening on http://{}", addr);

    loop {
        let (stream, peer) = listener.accept().await?;
        tokio::spawn(async move {
            if let Err(err) = handle_conn(stream, peer).await {
                eprintln!("[conn] connection {peer} error: {err}");
            }
        });
    }
}

async fn handle_conn(mut tcp: tokio::net::TcpStream, peer: SocketAddr) -> Result<()> {
    // One request per connection (keep-alive out of scope for now)
    let req = match proto::http::read_request(&mut tcp).await {
        Ok(r) => r,
        Err(code) => {
            let resp = proto::http::make_empty_response(code);
            tcp.write_all(resp.as_bytes()).await?;
            return Ok(());
        }
    };

    let response = router::handle_with_peer(req, Some(peer)).await?;
    let bytes = response.into_bytes();
    tcp.write_all(&bytes).await?;
    Ok(())
}
