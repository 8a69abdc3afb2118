// src/domain/post/services.rs

const WORDS_PER_MINUTE: usize = 200;

/// Reading-time estimate in whole minutes, never below one.
pub fn estimate_reading_time_min(markdown: &str) -> i32 {
    let words = markdown.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    i32::try_from(minutes).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_reads_in_one_minute() {
        assert_eq!(estimate_reading_time_min(""), 1);
        assert_eq!(estimate_reading_time_min("   \n  "), 1);
    }

    #[test]
    fn estimate_rounds_up_per_two_hundred_words() {
        let words_200 = "palabra ".repeat(200);
        let words_201 = "palabra ".repeat(201);
        assert_eq!(estimate_reading_time_min(&words_200), 1);
        assert_eq!(estimate_reading_time_min(&words_201), 2);
    }
}
