//! Environment sources.
//!
//! An [`Environment`] answers "what is the value of variable `NAME`", with
//! an empty string standing for both "unset" and "set to empty".

use extractors_core::{ExtractError, ExtractionSource, Key, Raw, Source};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where environment variables are read from.
///
/// # Example
///
/// ```rust
/// use extractors_env::Environment;
/// use std::collections::HashMap;
///
/// let mut vars = HashMap::new();
/// vars.insert("FOO".to_string(), "foo".to_string());
///
/// let env = Environment::map(&vars);
/// vars.insert("FOO".to_string(), "changed".to_string());
///
/// assert_eq!(env.getenv("FOO"), "foo");
/// assert_eq!(env.getenv("MISSING"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// The process environment.
    #[default]
    Os,
    /// A `KEY=VALUE` file, scanned again on every lookup.
    File(PathBuf),
    /// An in-memory snapshot of variables.
    Map(HashMap<String, String>),
}

impl Environment {
    /// Reads variables from a `KEY=VALUE` file on every lookup.
    ///
    /// Lines are trimmed and split on the first `=`; lines without a key,
    /// without a value or that are not valid UTF-8 are skipped and the
    /// topmost match wins. A file that
    /// cannot be read behaves like an empty environment.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Copies `vars` into a snapshot; later changes to `vars` are not seen.
    pub fn map(vars: &HashMap<String, String>) -> Self {
        Self::Map(vars.clone())
    }

    /// Reads a `KEY=VALUE` file once and serves lookups from memory.
    ///
    /// Uses the same line rules as [`Environment::file`], but a file that
    /// cannot be read is reported instead of treated as empty.
    pub fn load_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let mut vars = HashMap::new();
        for line in text_lines(reader) {
            let line = line?;
            if let Some((key, value)) = split_line(&line) {
                vars.entry(key.to_owned()).or_insert_with(|| value.to_owned());
            }
        }
        debug!(path = %path.as_ref().display(), variables = vars.len(), "loaded env file");
        Ok(Self::Map(vars))
    }

    /// Parses a dotenv document into a snapshot without touching the
    /// process environment.
    ///
    /// Unlike [`Environment::file`] this understands quoting, `export`
    /// prefixes, comments and variable substitution. When a variable is
    /// defined twice the first definition wins.
    pub fn from_dotenv(path: impl AsRef<Path>) -> Result<Self, dotenvy::Error> {
        let mut vars = HashMap::new();
        for item in dotenvy::from_path_iter(path.as_ref())? {
            let (key, value) = item?;
            vars.entry(key).or_insert(value);
        }
        debug!(path = %path.as_ref().display(), variables = vars.len(), "loaded dotenv file");
        Ok(Self::Map(vars))
    }

    /// Returns the value of `name`, or an empty string if it is unset.
    pub fn getenv(&self, name: &str) -> String {
        match self {
            Self::Os => std::env::var_os(name)
                .map(|raw| raw.to_string_lossy().into_owned())
                .unwrap_or_default(),
            Self::File(path) => scan_file(path, name).unwrap_or_default(),
            Self::Map(vars) => vars.get(name).cloned().unwrap_or_default(),
        }
    }
}

impl From<HashMap<String, String>> for Environment {
    fn from(vars: HashMap<String, String>) -> Self {
        Self::Map(vars)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl Source for Environment {
    fn origin(&self) -> ExtractionSource {
        ExtractionSource::Env
    }

    fn lookup(&self, key: &Key) -> Result<Raw<'_>, ExtractError> {
        Ok(Raw::non_empty(self.getenv(key.name())))
    }
}

/// Splits a trimmed `KEY=VALUE` line, rejecting empty keys and values.
fn split_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    let idx = line.find('=')?;
    if idx == 0 || idx + 1 >= line.len() {
        return None;
    }
    Some((&line[..idx], &line[idx + 1..]))
}

/// Splits on `\n` and skips lines that are not valid UTF-8, so one badly
/// encoded comment does not hide the variables after it.
fn text_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.split(b'\n').filter_map(|line| match line {
        Ok(bytes) => String::from_utf8(bytes).ok().map(Ok),
        Err(err) => Some(Err(err)),
    })
}

fn scan_file(path: &Path, name: &str) -> Option<String> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "env file unavailable");
            return None;
        }
    };

    for line in text_lines(BufReader::new(file)) {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "env file read failed");
                return None;
            }
        };
        if let Some((key, value)) = split_line(&line) {
            if key == name {
                return Some(value.to_owned());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_split_line() {
        assert_eq!(split_line("FOO=bar"), Some(("FOO", "bar")));
        assert_eq!(split_line("  FOO=bar  "), Some(("FOO", "bar")));
        assert_eq!(split_line("URL=a=b"), Some(("URL", "a=b")));
        assert_eq!(split_line("FOO"), None);
        assert_eq!(split_line("=bar"), None);
        assert_eq!(split_line("FOO="), None);
        assert_eq!(split_line(""), None);
    }

    #[test]
    fn test_file_lookup() {
        let file = env_file("ONE=1\nTWO=two\nTHREE=three\n");
        let env = Environment::file(file.path());

        assert_eq!(env.getenv("TWO"), "two");
        assert_eq!(env.getenv("ONE"), "1");
        assert_eq!(env.getenv("FOUR"), "");
    }

    #[test]
    fn test_file_topmost_match_wins() {
        let file = env_file("# comment\nNAME=first\nbroken line\nNAME=second\n");
        assert_eq!(Environment::file(file.path()).getenv("NAME"), "first");
    }

    #[test]
    fn test_file_is_reread_on_every_lookup() {
        let mut file = env_file("A=1\n");
        let env = Environment::file(file.path());
        assert_eq!(env.getenv("B"), "");

        file.write_all(b"B=2\n").unwrap();
        file.flush().unwrap();
        assert_eq!(env.getenv("B"), "2");
    }

    #[test]
    fn test_non_utf8_line_is_skipped() {
        let file = env_file("");
        std::fs::write(file.path(), b"# caf\xe9 latin-1 comment\nPORT=8080\nBAD=\xff\n").unwrap();

        let env = Environment::file(file.path());
        assert_eq!(env.getenv("PORT"), "8080");
        assert_eq!(env.getenv("BAD"), "");

        let loaded = Environment::load_file(file.path()).unwrap();
        assert_eq!(loaded.getenv("PORT"), "8080");
        assert_eq!(loaded.getenv("BAD"), "");
    }

    #[test]
    fn test_crlf_lines() {
        let file = env_file("ONE=1\r\nTWO=2\r\n");
        assert_eq!(Environment::file(file.path()).getenv("ONE"), "1");
    }

    #[test]
    fn test_missing_file_is_empty() {
        let env = Environment::file("/nonexistent/extractors/.env");
        assert_eq!(env.getenv("ANYTHING"), "");
    }

    #[test]
    fn test_load_file_snapshot() {
        let mut file = env_file("A=1\nA=2\n");
        let env = Environment::load_file(file.path()).unwrap();

        file.write_all(b"B=2\n").unwrap();
        file.flush().unwrap();

        assert_eq!(env.getenv("A"), "1");
        assert_eq!(env.getenv("B"), "");
    }

    #[test]
    fn test_load_file_missing_is_error() {
        assert!(Environment::load_file("/nonexistent/extractors/.env").is_err());
    }

    #[test]
    fn test_from_dotenv() {
        let file = env_file("# settings\nexport HOST=\"db.local\"\nPORT=5432\nEMPTY=\n");
        let env = Environment::from_dotenv(file.path()).unwrap();

        assert_eq!(env.getenv("HOST"), "db.local");
        assert_eq!(env.getenv("PORT"), "5432");
        assert_eq!(env.getenv("EMPTY"), "");
    }

    #[test]
    fn test_map_is_copied() {
        let mut vars = HashMap::new();
        vars.insert("FOO".to_string(), "foo".to_string());

        let env = Environment::map(&vars);
        vars.clear();

        assert_eq!(env.getenv("FOO"), "foo");
    }

    #[test]
    fn test_os_lookup() {
        std::env::set_var("EXTRACTORS_ENV_TEST_OS_LOOKUP", "present");
        assert_eq!(Environment::Os.getenv("EXTRACTORS_ENV_TEST_OS_LOOKUP"), "present");
        assert_eq!(Environment::Os.getenv("EXTRACTORS_ENV_TEST_OS_UNSET"), "");
    }

    #[test]
    fn test_lookup_treats_empty_as_absent() {
        let env: Environment = [("SET", "x"), ("EMPTY", "")].into_iter().collect();

        assert_eq!(env.lookup(&Key::from("SET")).unwrap(), Raw::non_empty("x"));
        assert_eq!(env.lookup(&Key::from("EMPTY")).unwrap(), Raw::Absent);
        assert_eq!(env.lookup(&Key::from("UNSET")).unwrap(), Raw::Absent);
    }
}
