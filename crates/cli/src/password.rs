use skeletonkey_core::SKELETONKEY_PASSWORD_VAR;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use zeroize::Zeroizing;

/// Read the password for a command
///
/// With `from_stdin` the first line of stdin is used; otherwise
/// `SKELETONKEY_PASSWORD` must be set.
pub async fn read(from_stdin: bool) -> eyre::Result<Zeroizing<String>> {
    if from_stdin {
        return read_line(BufReader::new(tokio::io::stdin())).await;
    }
    match std::env::var(SKELETONKEY_PASSWORD_VAR) {
        Ok(password) if !password.is_empty() => Ok(Zeroizing::new(password)),
        _ => eyre::bail!("no password given: set {SKELETONKEY_PASSWORD_VAR} or pass --password-stdin"),
    }
}

async fn read_line<R>(mut reader: R) -> eyre::Result<Zeroizing<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = Zeroizing::new(String::new());
    reader.read_line(&mut line).await?;

    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    if line.is_empty() {
        eyre::bail!("no password on stdin");
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_line_strips_newline() {
        let password = read_line(&b"secret123\n"[..]).await.unwrap();
        assert_eq!(password.as_str(), "secret123");

        let password = read_line(&b"p@ss word\r\nignored\n"[..]).await.unwrap();
        assert_eq!(password.as_str(), "p@ss word");
    }

    #[tokio::test]
    async fn test_read_line_keeps_inner_whitespace() {
        let password = read_line(&b"  padded  \n"[..]).await.unwrap();
        assert_eq!(password.as_str(), "  padded  ");
    }

    #[tokio::test]
    async fn test_empty_input_is_rejected() {
        assert!(read_line(&b""[..]).await.is_err());
        assert!(read_line(&b"\n"[..]).await.is_err());
    }
}
