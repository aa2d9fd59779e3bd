//! Per-line extraction of `depth`/`time` values from engine search output.
//!
//! Engines report iteration results as flat keyword/value token streams
//! (`info depth 12 seldepth 20 score cp 31 nodes 99999 time 453 pv ...`).
//! The value of a field is whatever token follows its keyword.

/// Fields of interest pulled from a single line, borrowed from it.
pub struct InfoFields<'a> {
    pub depth: Option<&'a str>,
    pub time: Option<&'a str>,
}

impl<'a> InfoFields<'a> {
    fn new() -> Self {
        Self {
            depth: None,
            time: None,
        }
    }

    /// The (depth, time) pair, if both fields were found.
    pub fn pair(&self) -> Option<(&'a str, &'a str)> {
        match (self.depth, self.time) {
            (Some(depth), Some(time)) => Some((depth, time)),
            _ => None,
        }
    }
}

/// Scan a token sequence for the `depth` and `time` keywords; each match
/// captures the following token as that field's value.
///
/// Every index is inspected, so repeated keywords overwrite (last wins)
/// and a value token is itself eligible to match. A keyword in final
/// position has no following token and is skipped.
pub fn scan_tokens<'a>(tokens: &[&'a str]) -> InfoFields<'a> {
    let mut fields = InfoFields::new();

    for (i, token) in tokens.iter().enumerate() {
        match *token {
            "depth" => {
                if let Some(&value) = tokens.get(i + 1) {
                    fields.depth = Some(value);
                }
            }
            "time" => {
                if let Some(&value) = tokens.get(i + 1) {
                    fields.time = Some(value);
                }
            }
            _ => {}
        }
    }

    fields
}

/// Extract the (depth, time) pair from one line of engine output.
///
/// Two phases: a substring gate on the raw line, then a token-exact scan.
/// The gate is weaker than the scan (`timeout` satisfies the `time`
/// substring, `seldepth` satisfies `depth`), so a line can pass the gate
/// and still produce nothing.
pub fn extract_pair(line: &str) -> Option<(&str, &str)> {
    if !line.contains("depth") || !line.contains("time") {
        return None;
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    scan_tokens(&tokens).pair()
}
