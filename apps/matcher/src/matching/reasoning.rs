//! Reasoning bands — maps a final percentage to the justification string
//! returned alongside it.

/// Returned whenever no exact or partial keyword overlap exists.
pub const NO_MATCH_REASONING: &str = "No significant match found";

/// Fixed band → phrase mapping. The sub-70 arm is only reachable through
/// the zero-match early return; any scored match is floored to at least 70.
pub fn reasoning_for(percentage: u32) -> String {
    if percentage >= 95 {
        format!("Excellent match ({percentage}%) - Strong alignment with job requirements")
    } else if percentage >= 90 {
        format!("Very strong match ({percentage}%) - High relevance to position")
    } else if percentage >= 85 {
        format!("Strong match ({percentage}%) - Good fit for the role")
    } else if percentage >= 80 {
        format!("Good match ({percentage}%) - Relevant experience and skills")
    } else if percentage >= 75 {
        format!("Fair match ({percentage}%) - Some relevant qualifications")
    } else if percentage >= 70 {
        format!("Basic match ({percentage}%) - Limited but relevant experience")
    } else {
        NO_MATCH_REASONING.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert!(reasoning_for(100).starts_with("Excellent match (100%)"));
        assert!(reasoning_for(95).starts_with("Excellent match"));
        assert!(reasoning_for(94).starts_with("Very strong match"));
        assert!(reasoning_for(90).starts_with("Very strong match"));
        assert!(reasoning_for(89).starts_with("Strong match"));
        assert!(reasoning_for(85).starts_with("Strong match"));
        assert!(reasoning_for(84).starts_with("Good match"));
        assert!(reasoning_for(80).starts_with("Good match"));
        assert!(reasoning_for(79).starts_with("Fair match"));
        assert!(reasoning_for(75).starts_with("Fair match"));
        assert!(reasoning_for(74).starts_with("Basic match"));
        assert!(reasoning_for(70).starts_with("Basic match"));
    }

    #[test]
    fn test_basic_band_full_text() {
        assert_eq!(
            reasoning_for(72),
            "Basic match (72%) - Limited but relevant experience"
        );
    }

    #[test]
    fn test_below_floor_is_no_match_text() {
        assert_eq!(reasoning_for(69), NO_MATCH_REASONING);
        assert_eq!(reasoning_for(0), NO_MATCH_REASONING);
    }
}
