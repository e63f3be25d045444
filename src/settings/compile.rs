//! Compilation of [`WgetSettings`] into an ordered argument list.

use std::time::Duration;

use crate::args::ArgumentList;

use super::error::SettingsError;
use super::options::WgetSettings;
use super::switch::Switch;

impl WgetSettings {
    /// Checks that the settings describe at least one download source.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingInput`] when no URL is set and the
    /// input file is unset or blank after trimming.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.url.is_none() && !is_present(self.input_file.as_deref()) {
            return Err(SettingsError::MissingInput);
        }
        Ok(())
    }

    /// Compiles the settings into the argument list handed to wget.
    ///
    /// The pass is deterministic and free of side effects: switches are
    /// emitted in the declaration order of [`Switch::ALL`], unset fields are
    /// skipped, and compiling the same settings twice yields identical
    /// lists.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingInput`] when the validation gate
    /// fails; no partial list is produced.
    pub fn compile(&self) -> Result<ArgumentList, SettingsError> {
        self.validate()?;

        let mut arguments = ArgumentList::new();
        self.emit(&mut arguments);
        Ok(arguments)
    }

    // One linear pass in the emission order of the switch table.
    #[allow(clippy::too_many_lines)]
    fn emit(&self, arguments: &mut ArgumentList) {
        if self.help {
            arguments.push_flag(Switch::Help.token());
        }
        if self.version {
            arguments.push_flag(Switch::Version.token());
        }
        if let Some(url) = &self.url {
            arguments.push_positional(url.as_str());
        }
        push_quoted(arguments, Switch::OutputDocument, self.output_document.as_deref());
        push_quoted(arguments, Switch::OutputFile, self.output_file.as_deref());
        push_quoted(arguments, Switch::AppendOutput, self.append_output.as_deref());
        if self.quiet {
            arguments.push_flag(Switch::Quiet.token());
        }
        if self.debug {
            arguments.push_flag(Switch::Debug.token());
        }
        if self.verbose {
            arguments.push_flag(Switch::Verbose.token());
        }
        if self.no_verbose {
            arguments.push_flag(Switch::NoVerbose.token());
        }
        push_quoted(arguments, Switch::InputFile, self.input_file.as_deref());
        if self.force_html {
            arguments.push_flag(Switch::ForceHtml.token());
        }
        push_quoted(arguments, Switch::Base, self.base.as_deref());
        push_quoted(arguments, Switch::RejectedLog, self.rejected_log.as_deref());
        if self.tries > 0 {
            arguments.push_pair(Switch::Tries.token(), self.tries.to_string());
        }
        push_quoted(arguments, Switch::DirectoryPrefix, self.directory_prefix.as_deref());
        if let Some(rate) = &self.limit_rate {
            if rate.value() > 0.0 {
                arguments.push_pair(Switch::LimitRate.token(), rate.format());
            }
        }
        if self.retry_connection_refused {
            arguments.push_flag(Switch::RetryConnectionRefused.token());
        }
        if self.recursive {
            arguments.push_flag(Switch::Recursive.token());
        }
        if self.level > 0 {
            arguments.push_pair(Switch::Level.token(), self.level.to_string());
        }
        push_duration(arguments, Switch::Wait, self.wait);
        push_duration(arguments, Switch::WaitRetry, self.wait_retry);
        if self.random_wait {
            arguments.push_flag(Switch::RandomWait.token());
        }
        push_quoted(arguments, Switch::User, self.user.as_deref());
        push_secret(arguments, Switch::Password, self.password.as_deref());
        push_quoted(arguments, Switch::HttpUser, self.http_user.as_deref());
        push_secret(arguments, Switch::HttpPassword, self.http_password.as_deref());
        push_quoted(arguments, Switch::FtpUser, self.ftp_user.as_deref());
        push_secret(arguments, Switch::FtpPassword, self.ftp_password.as_deref());
        if self.continue_download {
            arguments.push_flag(Switch::Continue.token());
        }
        push_duration(arguments, Switch::Timeout, self.timeout);
        push_duration(arguments, Switch::DnsTimeout, self.dns_timeout);
        push_duration(arguments, Switch::ConnectTimeout, self.connect_timeout);
        push_duration(arguments, Switch::ReadTimeout, self.read_timeout);
        if self.background {
            arguments.push_flag(Switch::Background.token());
        }
    }
}

/// Presence test for string options: set and non-blank after trimming.
fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Emits a quoted `name="value"` pair when the value is present.
///
/// The presence test trims, the emitted value does not: surrounding
/// whitespace in a deliberately set value is handed through verbatim.
fn push_quoted(arguments: &mut ArgumentList, switch: Switch, value: Option<&str>) {
    let Some(value) = value else { return };
    if value.trim().is_empty() {
        return;
    }
    arguments.push_quoted(switch.token(), value);
}

/// Emits a quoted pair whose value is masked in log output.
fn push_secret(arguments: &mut ArgumentList, switch: Switch, value: Option<&str>) {
    let Some(value) = value else { return };
    if value.trim().is_empty() {
        return;
    }
    arguments.push_secret(switch.token(), value);
}

/// Emits a `name=seconds` pair with invariant fractional-seconds formatting.
fn push_duration(arguments: &mut ArgumentList, switch: Switch, value: Option<Duration>) {
    if let Some(duration) = value {
        arguments.push_pair(switch.token(), duration.as_secs_f64().to_string());
    }
}
