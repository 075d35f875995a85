use std::{io::ErrorKind, ops::Range, path::Path, time::Duration};

use rand::{thread_rng, Rng};

use crate::account::Account;

/// Reads trimmed lines; blank ones are kept only with `allow_empty`.
/// A missing or unreadable file yields no lines.
pub async fn read_file_lines(path: impl AsRef<Path>, allow_empty: bool) -> Vec<String> {
    let path = path.as_ref();

    match try_read_file_lines(path, allow_empty).await {
        Ok(lines) => lines,
        Err(e) if e.kind() == ErrorKind::NotFound => vec![],
        Err(e) => {
            tracing::error!("Failed to read {}: {e}", path.display());
            vec![]
        }
    }
}

async fn try_read_file_lines(path: &Path, allow_empty: bool) -> std::io::Result<Vec<String>> {
    let file = tokio::fs::read(path).await?;

    // Undecodable bytes only spoil the line they sit on.
    let contents = String::from_utf8_lossy(&file)
        .lines()
        .map(str::trim)
        .filter(|line| allow_empty || !line.is_empty())
        .map(str::to_string)
        .collect();

    Ok(contents)
}

pub async fn read_private_keys(path: impl AsRef<Path>) -> eyre::Result<Vec<Account>> {
    read_file_lines(path, false)
        .await
        .iter()
        .enumerate()
        .map(|(i, pk)| {
            Account::from_private_key(pk)
                .map_err(|e| eyre::eyre!("Private key #{} is invalid: {e}", i + 1))
        })
        .collect()
}

/// Pads with empty tokens or truncates so that `tokens[i]` belongs to account `i`.
pub fn align_tokens(mut tokens: Vec<String>, accounts: usize) -> Vec<String> {
    tokens.resize(accounts, String::new());
    tokens
}

pub fn random_delay(range_ms: Range<u64>) -> Duration {
    Duration::from_millis(thread_rng().gen_range(range_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{temp_file, TEST_PRIVATE_KEY};

    #[tokio::test]
    async fn test_read_lines_drops_blank_lines() {
        let path = temp_file("lines-drop.txt", "  first \n\n   \nsecond\r\nthird").await;

        let lines = read_file_lines(&path, false).await;
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_read_lines_keeps_blank_lines() {
        let path = temp_file("lines-keep.txt", "a\n\n  \nb\n").await;

        let lines = read_file_lines(&path, true).await;
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(lines, vec!["a", "", "", "b"]);
    }

    #[tokio::test]
    async fn test_invalid_utf8_only_affects_its_line() {
        let path = temp_file("lines-utf8.txt", b"tok1\n\xff\xfe\ntok3\n".as_slice()).await;

        let lines = read_file_lines(&path, true).await;
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "tok1");
        assert!(lines[1].contains('\u{FFFD}'));
        assert_eq!(lines[2], "tok3");
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let path = std::env::temp_dir().join("claimer-does-not-exist.txt");

        assert!(read_file_lines(&path, false).await.is_empty());
        assert!(read_file_lines(&path, true).await.is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_path_is_empty() {
        // A directory exists but cannot be read as a file.
        let lines = read_file_lines(std::env::temp_dir(), true).await;

        assert!(lines.is_empty());
    }

    #[tokio::test]
    async fn test_read_private_keys() {
        let path = temp_file(
            "keys-valid.txt",
            &format!("{TEST_PRIVATE_KEY}\n\n0x{TEST_PRIVATE_KEY}\n"),
        )
        .await;

        let accounts = read_private_keys(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].address(), accounts[1].address());
    }

    #[tokio::test]
    async fn test_read_private_keys_rejects_garbage() {
        let path = temp_file("keys-invalid.txt", &format!("{TEST_PRIVATE_KEY}\nnot-a-key\n")).await;

        let err = read_private_keys(&path).await.err().unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert!(err.to_string().contains("#2"));
    }

    #[test]
    fn test_align_tokens_pads() {
        let tokens = align_tokens(vec!["t1".into()], 3);

        assert_eq!(tokens, vec!["t1", "", ""]);
    }

    #[test]
    fn test_align_tokens_truncates() {
        let tokens = align_tokens(vec!["t1".into(), "t2".into(), "t3".into()], 2);

        assert_eq!(tokens, vec!["t1", "t2"]);
    }

    #[test]
    fn test_align_tokens_matches_length() {
        for accounts in 0..6 {
            for given in 0..6 {
                let tokens = align_tokens(vec!["t".to_string(); given], accounts);
                assert_eq!(tokens.len(), accounts);
            }
        }
    }

    #[test]
    fn test_random_delay_in_range() {
        for _ in 0..100 {
            let delay = random_delay(2000..3000);
            assert!(delay >= Duration::from_millis(2000));
            assert!(delay < Duration::from_millis(3000));
        }
    }
}
