#![cfg(feature = "std")]

use std::io::Write;

use crate::core::Step;

pub struct Depth {
    depth: usize,
    inc: bool,
}

impl Depth {
    pub fn new() -> Self {
        let depth = DEPTH.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Self { depth, inc: true }
    }
}

impl Drop for Depth {
    fn drop(&mut self) {
        if self.inc {
            let _ = DEPTH.fetch_sub(1, std::sync::atomic::Ordering::SeqCst);
        }
    }
}

impl crate::lib::std::ops::Deref for Depth {
    type Target = usize;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.depth
    }
}

static DEPTH: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(0);

pub enum Severity {
    Commit,
    Skip,
    Stop,
    Error,
}

impl Severity {
    pub fn with_step<S, B>(step: &Step<S, B>) -> Self {
        match step {
            Step::Yield(..) | Step::YieldB(..) => Self::Commit,
            Step::Skip(..) => Self::Skip,
            Step::Stop(..) => Self::Stop,
            Step::Error(_) => Self::Error,
        }
    }
}

pub fn call(depth: usize, name: &dyn crate::lib::std::fmt::Display, token_count: usize) {
    let gutter_style = anstyle::Style::new().bold();
    let call_column = format!("{:depth$}> {name} #{token_count}", "");

    let writer = anstream::stderr();
    let mut writer = writer.lock();
    let _ = writeln!(
        writer,
        "{call_column:width$} {gutter_style}|{gutter_reset}",
        width = call_width(),
        gutter_style = gutter_style.render(),
        gutter_reset = gutter_style.render_reset(),
    );
}

pub fn result(depth: usize, name: &dyn crate::lib::std::fmt::Display, severity: Severity) {
    let call_column = format!("{:depth$}< {name}", "");

    let (status_style, status) = match severity {
        Severity::Commit => (
            anstyle::Style::new().fg_color(Some(anstyle::AnsiColor::Green.into())),
            "commit",
        ),
        Severity::Skip => (
            anstyle::Style::new().fg_color(Some(anstyle::AnsiColor::Cyan.into())),
            "skip",
        ),
        Severity::Stop => (
            anstyle::Style::new().fg_color(Some(anstyle::AnsiColor::Green.into())).bold(),
            "stop",
        ),
        Severity::Error => (
            anstyle::Style::new().fg_color(Some(anstyle::AnsiColor::Red.into())),
            "error",
        ),
    };

    let writer = anstream::stderr();
    let mut writer = writer.lock();
    let _ = writeln!(
        writer,
        "{status_style}{call_column:width$}{status_reset} {status}",
        width = call_width(),
        status_style = status_style.render(),
        status_reset = status_style.render_reset(),
    );
}

fn call_width() -> usize {
    let min_call_width = 40;
    let extra_width = term_width().saturating_sub(min_call_width + 12);
    min_call_width + extra_width / 2
}

fn term_width() -> usize {
    columns_env().or_else(query_width).unwrap_or(80)
}

fn query_width() -> Option<usize> {
    use is_terminal_polyfill::IsTerminal;
    if std::io::stderr().is_terminal() {
        terminal_size::terminal_size().map(|(w, _h)| w.0.into())
    } else {
        None
    }
}

fn columns_env() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.parse::<usize>().ok())
}
