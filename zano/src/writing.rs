//! File logging for the library.  Nothing is written unless
//! `ZANO_LOG_PATH` points at a file; the parent directory is created on
//! first use.

use std::{fs::OpenOptions, io::Write, path::Path};

pub const LOG_PATH_VAR: &str = "ZANO_LOG_PATH";

pub fn write_line(line: &str) {
    let Ok(path) = std::env::var(LOG_PATH_VAR) else {
        return;
    };
    if path.is_empty() {
        return;
    }
    if let Some(parent) = Path::new(&path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&path) {
        let _ = writeln!(f, "{}", line);
    }
}

pub fn stamp() -> String {
    chrono::Utc::now().format("%H:%M:%S%.3f").to_string()
}

#[macro_export]
macro_rules! log {
    ($fmt:literal $(,)?) => {{
        $crate::writing::write_line(&format!(concat!("{} | ", $fmt), $crate::writing::stamp()));
    }};
    ($fmt:literal, $($arg:tt)+) => {{
        $crate::writing::write_line(&format!(
            "{} | {}",
            $crate::writing::stamp(),
            format_args!($fmt, $($arg)+),
        ));
    }};
}
