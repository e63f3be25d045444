//! The typed wget configuration record.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use super::limit_rate::LimitRate;

/// Configuration record for a wget invocation.
///
/// Every field maps to one wget command-line option; unset fields are simply
/// not emitted. Build a value with struct-update syntax over
/// [`WgetSettings::default`] and hand it to
/// [`WgetRunner::run`](crate::tool::WgetRunner::run), or compile it yourself
/// with [`WgetSettings::compile`](Self::compile).
///
/// At least one of [`url`](Self::url) and [`input_file`](Self::input_file)
/// must be set; everything else is optional.
///
/// For the meaning of each option see the wget
/// [manual](https://www.gnu.org/software/wget/manual/wget.html).
///
/// # Example
///
/// ```
/// use url::Url;
/// use wget_run::settings::WgetSettings;
///
/// let settings = WgetSettings {
///     url: Some(Url::parse("https://example.com/archive.tar.gz").unwrap()),
///     output_document: Some("archive.tar.gz".into()),
///     tries: 3,
///     ..WgetSettings::default()
/// };
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[allow(clippy::struct_excessive_bools)] // wget switches are naturally boolean
pub struct WgetSettings {
    /// Print wget's help message (`--help`).
    pub help: bool,

    /// Display the wget version (`--version`).
    pub version: bool,

    /// URL to download, passed as the positional argument.
    pub url: Option<Url>,

    /// Concatenate all documents into this file (`--output-document`).
    pub output_document: Option<String>,

    /// Log all messages to this file instead of standard error
    /// (`--output-file`).
    pub output_file: Option<String>,

    /// Append messages to this log file instead of overwriting it
    /// (`--append-output`).
    pub append_output: Option<String>,

    /// Turn off wget's output (`--quiet`).
    pub quiet: bool,

    /// Turn on debug output (`--debug`).
    pub debug: bool,

    /// Turn on verbose output (`--verbose`). Wget's default output is
    /// already verbose.
    pub verbose: bool,

    /// Turn off verbose output without being completely quiet
    /// (`--no-verbose`).
    pub no_verbose: bool,

    /// Read URLs from this local or external file (`--input-file`). If set,
    /// no URL needs to be present; when both are given, the URL is
    /// retrieved first.
    pub input_file: Option<String>,

    /// Treat the input file as HTML (`--force-html`).
    pub force_html: bool,

    /// Resolve relative links in the input file against this URL
    /// (`--base`).
    pub base: Option<String>,

    /// Log all URL rejections to this file as comma-separated values
    /// (`--rejected-log`).
    pub rejected_log: Option<String>,

    /// Number of retries per file (`--tries`). Zero leaves wget's default
    /// of 20 in place.
    pub tries: u32,

    /// Directory where the retrieval tree is saved (`--directory-prefix`).
    pub directory_prefix: Option<String>,

    /// Download speed limit (`--limit-rate`). A zero magnitude leaves the
    /// limit unset.
    pub limit_rate: Option<LimitRate>,

    /// Treat "connection refused" as a transient error and retry
    /// (`--retry-connrefused`).
    pub retry_connection_refused: bool,

    /// Turn on recursive retrieving (`--recursive`).
    pub recursive: bool,

    /// Maximum recursion depth (`--level`). Zero leaves wget's default
    /// of 5 in place.
    pub level: u32,

    /// Wait between retrievals (`--wait`, fractional seconds).
    pub wait: Option<Duration>,

    /// Maximum linear-backoff wait between retries of a failed download
    /// (`--wait-retry`, fractional seconds).
    pub wait_retry: Option<Duration>,

    /// Randomize the time between requests to 0.5..1.5 times the wait
    /// interval (`--random-wait`).
    pub random_wait: bool,

    /// Username for both FTP and HTTP retrieval (`--user`).
    pub user: Option<String>,

    /// Password for both FTP and HTTP retrieval (`--password`). Masked in
    /// log output.
    pub password: Option<String>,

    /// Username on an HTTP server (`--http-user`).
    pub http_user: Option<String>,

    /// Password on an HTTP server (`--http-password`). Masked in log
    /// output.
    pub http_password: Option<String>,

    /// Username on an FTP server (`--ftp-user`).
    pub ftp_user: Option<String>,

    /// Password on an FTP server (`--ftp-password`). Masked in log output.
    pub ftp_password: Option<String>,

    /// Continue getting a partially-downloaded file (`--continue`).
    pub continue_download: bool,

    /// Network timeout, equivalent to setting the DNS, connect and read
    /// timeouts at once (`--timeout`, fractional seconds).
    pub timeout: Option<Duration>,

    /// DNS lookup timeout (`--dns-timeout`, fractional seconds).
    pub dns_timeout: Option<Duration>,

    /// TCP connect timeout (`--connect-timeout`, fractional seconds).
    pub connect_timeout: Option<Duration>,

    /// Read/write idle timeout (`--read-timeout`, fractional seconds).
    pub read_timeout: Option<Duration>,

    /// Go to background immediately after startup (`--background`).
    pub background: bool,

    /// Explicit path to the wget executable. Bypasses search-path
    /// discovery; never emitted as an argument.
    pub tool_path: Option<PathBuf>,
}
