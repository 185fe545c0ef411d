/// Terminal color hint exported by rxvt, Konsole, iTerm2 and others.
const COLORFGBG_ENV: &str = "COLORFGBG";

/// Whether the terminal advertises a dark background.
///
/// `None` when the environment gives no signal.
pub fn system_prefers_dark() -> Option<bool> {
    let value = std::env::var(COLORFGBG_ENV).ok()?;
    parse_colorfgbg(&value)
}

/// Parse `COLORFGBG` (`"fg;bg"` or `"fg;default;bg"`).
///
/// ANSI backgrounds 0-6 and 8 are dark; 7 and 9-15 are light.
pub fn parse_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match bg {
        0..=6 | 8 => Some(true),
        7 | 9..=15 => Some(false),
        _ => None,
    }
}
