use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU8, Ordering};

///
/// Level
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug, // least severe
    #[default]
    Info,
    Ok,
    Warn,
    Error, // most severe
}

impl Level {
    const fn as_u8(self) -> u8 {
        match self {
            Self::Debug => 0,
            Self::Info => 1,
            Self::Ok => 2,
            Self::Warn => 3,
            Self::Error => 4,
        }
    }
}

///
/// Topic
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum Topic {
    Config,
    Dialog,
    Gate,
    Navigation,
}

// lowest level that gets written; Info until a config says otherwise
static MIN_LEVEL: AtomicU8 = AtomicU8::new(Level::Info.as_u8());

/// Set the lowest level that reaches the sink.
pub fn set_min_level(level: Level) {
    MIN_LEVEL.store(level.as_u8(), Ordering::Relaxed);
}

#[must_use]
pub fn enabled(level: Level) -> bool {
    level.as_u8() >= MIN_LEVEL.load(Ordering::Relaxed)
}

#[macro_export]
macro_rules! log {
    // =========================================
    // INTERNAL
    // =========================================
    (@inner $topic:expr, $level:expr, $fmt:expr $(, $arg:expr)*) => {{
        let level = $level;
        if $crate::log::enabled(level) {
            let topic_opt: Option<&str> = $topic;
            let message = format!($fmt $(, $arg)*);

            $crate::log::__write(topic_opt, level, &message);
        }
    }};

    // =========================================
    // (1) With topic (normal + trailing comma)
    // =========================================
    ($topic:expr, $level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::log!(@inner Some(&$topic.to_string()), $crate::log::Level::$level, $fmt $(, $arg)*);
    }};

    // =========================================
    // (2) No topic (normal + trailing comma)
    // =========================================
    ($level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::log!(@inner None::<&str>, $crate::log::Level::$level, $fmt $(, $arg)*);
    }};
}

///
/// Helpers
///

#[doc(hidden)]
pub fn __write(topic: Option<&str>, level: Level, message: &str) {
    eprintln!("{}", __render(topic, level, message));
}

#[doc(hidden)]
#[must_use]
pub fn __render(topic: Option<&str>, level: Level, message: &str) -> String {
    let (color, reset) = match level {
        Level::Ok => ("\x1b[32m", "\x1b[0m"),
        Level::Info => ("\x1b[34m", "\x1b[0m"),
        Level::Warn => ("\x1b[33m", "\x1b[0m"),
        Level::Error => ("\x1b[31m", "\x1b[0m"),
        Level::Debug => ("", ""),
    };

    let label = format!("{color}{:^5}{reset}", level.to_string().to_uppercase());
    let topic = topic.unwrap_or("...");

    format!("{label}|{topic:^12}| {message}")
}

///
/// TESTS
///
