/// Side of the horizontal counting line an object's centre lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Above the counting line (smaller image y)
    Top,
    /// On or below the counting line
    Bottom,
}

/// Row of the counting line for a frame of the given height.
#[inline]
pub fn middle_line(frame_height: u32) -> u32 {
    frame_height / 2
}

/// Classify a vertical centre coordinate against the middle line.
///
/// Positions are not clamped to the frame, so boxes partially outside the
/// image are classified by the same inequality. A centre lying exactly on
/// the line belongs to `Bottom`.
#[inline]
pub fn classify(y_center: f32, frame_height: u32) -> Zone {
    if y_center < middle_line(frame_height) as f32 {
        Zone::Top
    } else {
        Zone::Bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_line_floors() {
        assert_eq!(middle_line(100), 50);
        assert_eq!(middle_line(101), 50);
        assert_eq!(middle_line(1), 0);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(20.0, 100), Zone::Top);
        assert_eq!(classify(80.0, 100), Zone::Bottom);
        assert_eq!(classify(49.9, 100), Zone::Top);
    }

    #[test]
    fn test_classify_on_line_is_bottom() {
        assert_eq!(classify(50.0, 100), Zone::Bottom);
        assert_eq!(classify(50.0, 101), Zone::Bottom);
    }

    #[test]
    fn test_classify_out_of_frame() {
        assert_eq!(classify(-15.0, 100), Zone::Top);
        assert_eq!(classify(250.0, 100), Zone::Bottom);
    }
}
