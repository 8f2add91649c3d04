/// Entry count shown in the header and footer ("1 photo", "3 photos")
pub fn photo_count_label(count: usize) -> String {
    if count == 1 {
        "1 photo".to_string()
    } else {
        format!("{} photos", count)
    }
}

/// One-based position of the open image, e.g. "2 / 3"
pub fn position_label(index: usize, len: usize) -> String {
    format!("{} / {}", index + 1, len)
}

/// Number badge on a grid cell, e.g. "#1"
pub fn badge_label(index: usize) -> String {
    format!("#{}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(photo_count_label(0), "0 photos");
        assert_eq!(photo_count_label(1), "1 photo");
        assert_eq!(photo_count_label(3), "3 photos");
    }

    #[test]
    fn position_and_badge_are_one_based() {
        assert_eq!(position_label(0, 3), "1 / 3");
        assert_eq!(position_label(2, 3), "3 / 3");
        assert_eq!(badge_label(0), "#1");
        assert_eq!(badge_label(9), "#10");
    }
}
