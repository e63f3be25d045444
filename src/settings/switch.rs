//! The switch table binding configuration fields to wget's option tokens.

/// Identifier for every wget option [`WgetSettings`](super::WgetSettings)
/// can emit.
///
/// The declaration order is the emission order of the compiler. Wget is
/// positional-sensitive for the download URL and tolerant elsewhere, but a
/// fixed order keeps compiled argument lists deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Switch {
    Help,
    Version,
    Url,
    OutputDocument,
    OutputFile,
    AppendOutput,
    Quiet,
    Debug,
    Verbose,
    NoVerbose,
    InputFile,
    ForceHtml,
    Base,
    RejectedLog,
    Tries,
    DirectoryPrefix,
    LimitRate,
    RetryConnectionRefused,
    Recursive,
    Level,
    Wait,
    WaitRetry,
    RandomWait,
    User,
    Password,
    HttpUser,
    HttpPassword,
    FtpUser,
    FtpPassword,
    Continue,
    Timeout,
    DnsTimeout,
    ConnectTimeout,
    ReadTimeout,
    Background,
}

impl Switch {
    /// Every switch in emission order.
    pub const ALL: [Self; 35] = [
        Self::Help,
        Self::Version,
        Self::Url,
        Self::OutputDocument,
        Self::OutputFile,
        Self::AppendOutput,
        Self::Quiet,
        Self::Debug,
        Self::Verbose,
        Self::NoVerbose,
        Self::InputFile,
        Self::ForceHtml,
        Self::Base,
        Self::RejectedLog,
        Self::Tries,
        Self::DirectoryPrefix,
        Self::LimitRate,
        Self::RetryConnectionRefused,
        Self::Recursive,
        Self::Level,
        Self::Wait,
        Self::WaitRetry,
        Self::RandomWait,
        Self::User,
        Self::Password,
        Self::HttpUser,
        Self::HttpPassword,
        Self::FtpUser,
        Self::FtpPassword,
        Self::Continue,
        Self::Timeout,
        Self::DnsTimeout,
        Self::ConnectTimeout,
        Self::ReadTimeout,
        Self::Background,
    ];

    /// Canonical command-line token bound to this switch.
    ///
    /// The token for [`Switch::Url`] is empty: the URL is passed as a bare
    /// positional argument. All other tokens are wget's long-form switches.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Help => "--help",
            Self::Version => "--version",
            Self::Url => "",
            Self::OutputDocument => "--output-document",
            Self::OutputFile => "--output-file",
            Self::AppendOutput => "--append-output",
            Self::Quiet => "--quiet",
            Self::Debug => "--debug",
            Self::Verbose => "--verbose",
            Self::NoVerbose => "--no-verbose",
            Self::InputFile => "--input-file",
            Self::ForceHtml => "--force-html",
            Self::Base => "--base",
            Self::RejectedLog => "--rejected-log",
            Self::Tries => "--tries",
            Self::DirectoryPrefix => "--directory-prefix",
            Self::LimitRate => "--limit-rate",
            Self::RetryConnectionRefused => "--retry-connrefused",
            Self::Recursive => "--recursive",
            Self::Level => "--level",
            Self::Wait => "--wait",
            Self::WaitRetry => "--wait-retry",
            Self::RandomWait => "--random-wait",
            Self::User => "--user",
            Self::Password => "--password",
            Self::HttpUser => "--http-user",
            Self::HttpPassword => "--http-password",
            Self::FtpUser => "--ftp-user",
            Self::FtpPassword => "--ftp-password",
            Self::Continue => "--continue",
            Self::Timeout => "--timeout",
            Self::DnsTimeout => "--dns-timeout",
            Self::ConnectTimeout => "--connect-timeout",
            Self::ReadTimeout => "--read-timeout",
            Self::Background => "--background",
        }
    }
}
