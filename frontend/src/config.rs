use log::Level;

pub const WHATSAPP_NUMBER: &str = "5521972560779";
pub const WHATSAPP_DISPLAY_NUMBER: &str = "+55 21 97256-0779";

/// How long the "form sent" banner stays up after a submission.
pub const SUCCESS_BANNER_MS: u32 = 5_000;

/// Scroll offset after which the header switches to its compact style.
pub const HEADER_SCROLL_THRESHOLD: i32 = 80;

pub fn whatsapp_base_url() -> String {
    format!("https://wa.me/{}", WHATSAPP_NUMBER)
}

pub fn youtube_embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}?rel=0&modestbranding=1", video_id)
}

pub fn youtube_watch_url(video_id: &str) -> String {
    format!("https://youtu.be/{}", video_id)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty console while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youtube_urls_follow_fixed_templates() {
        assert_eq!(
            youtube_embed_url("5P34Ve2sp3s"),
            "https://www.youtube.com/embed/5P34Ve2sp3s?rel=0&modestbranding=1"
        );
        assert_eq!(youtube_watch_url("lQI0lsiqcZQ"), "https://youtu.be/lQI0lsiqcZQ");
    }

    #[test]
    fn whatsapp_base_points_at_the_practice_number() {
        assert_eq!(whatsapp_base_url(), "https://wa.me/5521972560779");
    }
}
