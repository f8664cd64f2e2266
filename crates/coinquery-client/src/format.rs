//! JSON rendering of balance responses

use coinquery_errors::{Error, Result};
use coinquery_types::BalanceResponse;
use std::io::Write;

/// Render the balance envelope as compact JSON
pub fn render(response: &BalanceResponse) -> Result<String> {
    Ok(serde_json::to_string(response)?)
}

/// Write the rendered document followed by a newline.
///
/// The whole document is rendered before anything is written, so a failure
/// never leaves partial output behind.
pub fn write_response<W: Write>(response: &BalanceResponse, mut out: W) -> Result<()> {
    let text = render(response)?;
    writeln!(out, "{text}").map_err(|e| Error::Format(e.to_string()))?;
    out.flush().map_err(|e| Error::Format(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinquery_types::BalanceRecord;
    use std::io;

    #[test]
    fn test_render_preserves_order() {
        let response = BalanceResponse::from(vec![
            BalanceRecord::new("uatom", "500").unwrap(),
            BalanceRecord::new("stake", "10").unwrap(),
        ]);
        assert_eq!(
            render(&response).unwrap(),
            r#"{"balances":[{"Coin":"uatom","Value":"500"},{"Coin":"stake","Value":"10"}]}"#
        );
    }

    #[test]
    fn test_render_empty() {
        let response = BalanceResponse::from(vec![]);
        assert_eq!(render(&response).unwrap(), r#"{"balances":[]}"#);
    }

    #[test]
    fn test_render_escapes_strings() {
        let response = BalanceResponse::from(vec![BalanceRecord {
            denom: "ibc/\"quoted\"".to_string(),
            amount: "1".to_string(),
        }]);
        assert_eq!(
            render(&response).unwrap(),
            r#"{"balances":[{"Coin":"ibc/\"quoted\"","Value":"1"}]}"#
        );
    }

    #[test]
    fn test_write_response_appends_newline() {
        let response = BalanceResponse::from(vec![BalanceRecord::new("utoken", "1000").unwrap()]);
        let mut out = Vec::new();
        write_response(&response, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"balances\":[{\"Coin\":\"utoken\",\"Value\":\"1000\"}]}\n"
        );
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_format_error() {
        let err = write_response(&BalanceResponse::default(), BrokenPipe).unwrap_err();
        assert_eq!(err.kind(), "format");
        assert!(err.to_string().contains("pipe closed"));
    }
}
