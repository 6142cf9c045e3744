//! Text report rendering.
//!
//! Every target produces the same block of lines:
//!
//! ```text
//! Checking... URL : https://example.com
//!
//! [Headers]
//!     Content-Type                        : text/html
//!
//! [Cookie]
//!     id=42; Secure
//!
//! [OK]:HSTS is set: max-age=31536000
//! [CRITICAL]:Secure attribute is not set on any of the cookies.
//! ```

use std::io::{self, Write};

use crate::audit::verdict::Verdict;
use crate::config::OutputConfig;
use crate::http::{FetchError, ResponseSnapshot};
use crate::output::{Painter, Tone};

/// Writes report sections for each audited target.
pub struct Reporter<W> {
    out: W,
    painter: Painter,
    header_width: usize,
    separator: String,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, config: &OutputConfig) -> Self {
        Self {
            out,
            painter: Painter::new(config.color),
            header_width: config.header_width,
            separator: config.separator.clone(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self, url: &str) -> io::Result<()> {
        self.painter
            .writeln(&mut self.out, Tone::Info, &format!("Checking... URL : {url}"))?;
        writeln!(self.out)
    }

    /// Print the `[Headers]` section, one line per header value.
    pub fn headers(&mut self, response: &ResponseSnapshot) -> io::Result<()> {
        self.painter.writeln(&mut self.out, Tone::Warning, "[Headers]")?;
        for (name, value) in response.header_entries() {
            let key = format!("\t{:<width$} : ", name, width = self.header_width);
            self.painter.write(&mut self.out, Tone::Key, &key)?;
            self.painter.writeln(&mut self.out, Tone::Value, &value)?;
        }
        writeln!(self.out)
    }

    /// Print the `[Cookie]` section listing the secure cookies.
    pub fn cookies(&mut self, verdict: &Verdict) -> io::Result<()> {
        self.painter.writeln(&mut self.out, Tone::Warning, "[Cookie]")?;
        for cookie in &verdict.secure_cookies {
            writeln!(self.out, "\t{cookie}")?;
        }
        writeln!(self.out)
    }

    pub fn verdict(&mut self, verdict: &Verdict) -> io::Result<()> {
        match verdict.hsts {
            Some(ref value) => self.painter.writeln(
                &mut self.out,
                Tone::Success,
                &format!("[OK]:HSTS is set: {value}"),
            )?,
            None => self
                .painter
                .writeln(&mut self.out, Tone::Critical, "[CRITICAL]:HSTS is not set.")?,
        }

        if verdict.secure_cookie_present() {
            self.painter.writeln(
                &mut self.out,
                Tone::Success,
                "[OK]:Secure attribute is set on one or more cookies.",
            )
        } else {
            self.painter.writeln(
                &mut self.out,
                Tone::Critical,
                "[CRITICAL]:Secure attribute is not set on any of the cookies.",
            )
        }
    }

    pub fn fetch_error(&mut self, err: &FetchError) -> io::Result<()> {
        self.painter.writeln(
            &mut self.out,
            Tone::Warning,
            &format!("[ERROR]:can not get info of url:{}\nerror:{}", err.url, err),
        )
    }

    /// Report a failure that aborts the whole run.
    pub fn fatal(&mut self, err: &dyn std::error::Error) -> io::Result<()> {
        self.painter
            .writeln(&mut self.out, Tone::Warning, &format!("[ERROR]:{err}"))
    }

    pub fn separator(&mut self) -> io::Result<()> {
        self.painter
            .writeln(&mut self.out, Tone::Data, &self.separator)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
