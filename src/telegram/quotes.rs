//! Canned chat replies
//!
//! The bot answers long-running and failed requests with a random quote
//! from a small pool instead of a bare status line. Tool exit codes and
//! transcripts never reach the chat; they go to the log only.

use rand::seq::IndexedRandom;

/// Reply to `/start`.
pub const GREETING: &str = "Привет! Отправь мне ссылку на YouTube видео, и я скачаю его для тебя.";

/// Reply to anything that is neither `/start` nor a YouTube link.
pub const UNRECOGNIZED: &str = "Не понимаю команду. Отправь ссылку на YouTube видео.";

/// Reply when the compressed video still exceeds the Telegram upload limit.
pub const TOO_LARGE: &str = "Видео слишком большое для Telegram (лимит 50MB). Попробуй другое видео.";

/// Filler pool; `random_downloading_quote` picks from here.
pub const DOWNLOADING_QUOTES: &[&str] = &[
    "Принял! Скачиваю и сжимаю видео, подожди немного...",
    "Уже бегу за твоим видео 🏃",
    "Качаю. Большие видео могут занять пару минут.",
    "Запускаю загрузку, скоро вернусь с видео.",
];

/// Failure pool; `random_error_quote` picks from here.
pub const ERROR_QUOTES: &[&str] = &[
    "Что-то пошло не так. Попробуй ещё раз попозже.",
    "Не получилось скачать это видео 😔 Попробуй другую ссылку.",
    "YouTube сегодня не в духе. Попробуй ещё раз.",
];

/// Filler acknowledgment sent before the pipeline starts.
pub fn random_downloading_quote() -> &'static str {
    DOWNLOADING_QUOTES.choose(&mut rand::rng()).copied().unwrap_or(DOWNLOADING_QUOTES[0])
}

/// Generic failure notice for any pipeline error.
pub fn random_error_quote() -> &'static str {
    ERROR_QUOTES.choose(&mut rand::rng()).copied().unwrap_or(ERROR_QUOTES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotes_come_from_their_pools() {
        assert!(DOWNLOADING_QUOTES.contains(&random_downloading_quote()));
        assert!(ERROR_QUOTES.contains(&random_error_quote()));
    }
}
