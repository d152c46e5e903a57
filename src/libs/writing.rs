use std::io::{self, StdoutLock, Write};

use zano::{AssetDescriptor, AssetInfo, BalanceEntry, TransferResult, ZanoError};

use crate::constants::{NO_COLOR, TICKER_WIDTH};

pub mod cc {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
    pub const ORANGE: &str = "\x1b[38;5;208m";
    pub const LIGHT_GRAY: &str = "\x1b[38;5;245m";
    pub const LIGHT_GREEN: &str = "\x1b[92m";
}

/// `color`, or nothing when colors are switched off.
pub fn paint(color: &'static str) -> &'static str {
    if *NO_COLOR {
        ""
    } else {
        color
    }
}

/// One timestamped stderr line; backs [`log!`](crate::log).
pub fn emit(color: &'static str, args: std::fmt::Arguments<'_>) {
    let time = chrono::Utc::now().format("%H:%M:%S%.3f");
    let mut stderr = io::stderr().lock();
    let _ = writeln!(
        stderr,
        "{}{} |{} {}{}{}",
        paint(cc::LIGHT_GRAY),
        time,
        paint(cc::RESET),
        paint(color),
        args,
        paint(cc::RESET),
    );
}

#[macro_export]
macro_rules! log {
    // log!("plain: {}", x);
    ($fmt:literal $(, $($arg:tt)+)?) => {{
        $crate::libs::writing::emit(
            $crate::libs::writing::cc::LIGHT_GRAY,
            format_args!($fmt $(, $($arg)+)?),
        );
    }};
    // log!(cc::RED, "failed: {}", e);
    ($color:expr, $fmt:literal $(, $($arg:tt)+)?) => {{
        $crate::libs::writing::emit($color, format_args!($fmt $(, $($arg)+)?));
    }};
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        $crate::libs::writing::emit($crate::libs::writing::cc::ORANGE, format_args!($($arg)*));
    }};
}

pub fn balance_rows(entries: &[BalanceEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|b| {
            format!(
                "{:<width$} {:>24}  {}  {}",
                b.ticker,
                b.unlocked,
                b.name,
                b.asset_id,
                width = TICKER_WIDTH
            )
        })
        .collect()
}

pub fn asset_row(a: &AssetDescriptor) -> String {
    format!(
        "{:<width$} dp={:<2} {}  {}",
        a.ticker,
        a.decimal_point,
        a.full_name,
        a.asset_id,
        width = TICKER_WIDTH
    )
}

/// Rows for an asset listing; `limit` 0 keeps every row, otherwise the
/// tail is folded into a single "more" line.
pub fn asset_rows(assets: &[AssetDescriptor], limit: usize) -> Vec<String> {
    let shown = if limit == 0 { assets.len() } else { limit.min(assets.len()) };
    let mut rows: Vec<String> = assets[..shown].iter().map(asset_row).collect();
    if shown < assets.len() {
        rows.push(format!("… and {} more", assets.len() - shown));
    }
    rows
}

pub fn asset_info_rows(asset_id: &str, info: &AssetInfo) -> Vec<String> {
    let mut rows = vec![format!("status: {}", info.status)];
    match &info.asset_descriptor {
        Some(d) => {
            rows.push(asset_row(d));
            for (k, v) in &d.extra {
                rows.push(format!("  {k}: {v}"));
            }
        }
        None => rows.push(format!("no descriptor returned for {asset_id}")),
    }
    rows
}

pub fn transfer_rows(res: &TransferResult) -> Vec<String> {
    let mut rows = vec![format!(
        "tx_hash: {}",
        res.tx_hash().unwrap_or("-")
    )];
    if let Some(size) = res.tx_size() {
        rows.push(format!("tx_size: {size}"));
    }
    for (k, v) in res.extra() {
        rows.push(format!("{k}: {v}"));
    }
    rows
}

/// "message (Code: CODE)" for library errors, the plain chain otherwise.
pub fn describe_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ZanoError>() {
        Some(z) => format!("{} (Code: {})", z, z.code()),
        None => format!("{err:#}"),
    }
}

pub struct Colors<'a> {
    lock: StdoutLock<'a>,
}

impl<'a> Colors<'a> {
    pub fn new(lock: StdoutLock<'a>) -> Self {
        Self { lock }
    }

    pub fn title(&mut self, text: &str) {
        let _ = writeln!(
            self.lock,
            "{}{}{}{}",
            paint(cc::BOLD),
            paint(cc::CYAN),
            text,
            paint(cc::RESET)
        );
    }

    pub fn rows(&mut self, rows: &[String]) {
        for r in rows {
            let _ = writeln!(self.lock, "{r}");
        }
    }
}
