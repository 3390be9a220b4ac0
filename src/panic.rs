//! Panic hook producing readable error reports.

use std::io::IsTerminal;

/// ANSI styles used by the report, all empty when color is disabled.
#[derive(Clone, Copy)]
struct Theme {
    reset: &'static str,
    header: &'static str,
    label: &'static str,
    detail: &'static str,
}

impl Theme {
    fn plain() -> Self {
        Self {
            reset: "",
            header: "",
            label: "",
            detail: "",
        }
    }

    fn colored() -> Self {
        Self {
            reset: "\x1b[0m",
            header: "\x1b[1;31m",
            label: "\x1b[1;36m",
            detail: "\x1b[90m",
        }
    }
}

fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

fn backtrace_requested() -> bool {
    matches!(
        std::env::var("RUST_BACKTRACE").ok().as_deref(),
        Some("1" | "full")
    )
}

/// Installs a hook that reports panics with their message and location.
///
/// Panics indicate violated internal invariants, so the report is aimed at debugging, not at the
/// proof author. Honors NO_COLOR and non-terminal standard error.
pub(crate) fn install_panic_hook() {
    let theme = if use_color() {
        Theme::colored()
    } else {
        Theme::plain()
    };
    std::panic::set_hook(Box::new(move |info| {
        let message = info
            .payload()
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| info.payload().downcast_ref::<&str>().copied())
            .unwrap_or("panic without message");
        eprintln!("{}natty error{}", theme.header, theme.reset);
        eprintln!("{}Message{}   {message}", theme.label, theme.reset);
        match info.location() {
            Some(location) => eprintln!(
                "{}Location{}  {}{}:{}:{}{}",
                theme.label,
                theme.reset,
                theme.detail,
                location.file(),
                location.line(),
                location.column(),
                theme.reset
            ),
            None => eprintln!(
                "{}Location{}  {}unknown{}",
                theme.label, theme.reset, theme.detail, theme.reset
            ),
        }
        if backtrace_requested() {
            let backtrace = std::backtrace::Backtrace::force_capture();
            eprintln!(
                "{}Backtrace{}\n{}{}{}",
                theme.label, theme.reset, theme.detail, backtrace, theme.reset
            );
        } else {
            eprintln!(
                "{}note: run with `RUST_BACKTRACE=1` environment variable to display a backtrace{}",
                theme.detail, theme.reset
            );
        }
    }));
}
