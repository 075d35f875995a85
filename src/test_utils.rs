use std::path::PathBuf;

// Anvil's first account
pub const TEST_PRIVATE_KEY: &str =
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

pub async fn temp_file(name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = std::env::temp_dir().join(format!("claimer-{}-{name}", std::process::id()));
    tokio::fs::write(&path, contents).await.unwrap();
    path
}
