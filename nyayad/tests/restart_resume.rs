use nyayad::index::tantivy::TantivyIndexEngine;
use nyayad::index::{IndexEngine, LawDocument};
use std::path::PathBuf;

fn tempdir() -> PathBuf {
    let mut p = std::env::temp_dir();
    let uniq = format!("nyayad-restart-{}-{}", std::process::id(), rand_suffix());
    p.push(uniq);
    p
}

fn rand_suffix() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ns = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{:x}", ns)
}

#[test]
fn disk_index_persists_across_reopen() {
    let dir = tempdir();

    // first: create, add law, commit+refresh
    {
        let engine = TantivyIndexEngine::open_or_create_in_dir(&dir).expect("open/create");
        assert_eq!(engine.num_docs(), 0);

        engine
            .add(LawDocument {
                law_id: 7,
                title: "Persist Me".into(),
                act: "Evidence Act".into(),
                section: "65B".into(),
                content: "Content survives restarts".into(),
            })
            .expect("add");
        engine.commit().expect("commit");
        engine.refresh().expect("refresh");
        assert_eq!(engine.num_docs(), 1);
    }

    // second: reopen same directory, verify the law is still visible
    {
        let engine = TantivyIndexEngine::open_or_create_in_dir(&dir).expect("reopen");
        assert_eq!(engine.num_docs(), 1);
    }
}
