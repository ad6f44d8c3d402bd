//! Shake detection from raw accelerometer samples

use crate::game::ActionEvent;

/// Magnitude a sample must exceed to count as a shake
pub const SHAKE_THRESHOLD: f32 = 20.0;

/// Turns 3-axis accelerometer samples into shake events
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShakeDetector {
    threshold: f32,
}

impl ShakeDetector {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Feed one sample; yields a shake when its magnitude is strictly above the threshold
    pub fn sample(&self, x: f32, y: f32, z: f32) -> Option<ActionEvent> {
        let magnitude = (x * x + y * y + z * z).sqrt();
        if magnitude > self.threshold {
            log::trace!("Shake detected, magnitude {:.2}", magnitude);
            Some(ActionEvent::ShakeDetected)
        } else {
            None
        }
    }
}

impl Default for ShakeDetector {
    fn default() -> Self {
        Self::new(SHAKE_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resting_device_is_not_a_shake() {
        let detector = ShakeDetector::default();
        // Gravity alone
        assert_eq!(detector.sample(0.0, 0.0, 9.81), None);
    }

    #[test]
    fn test_threshold_is_strict() {
        let detector = ShakeDetector::default();
        assert_eq!(detector.sample(12.0, 16.0, 0.0), None); // exactly 20
        assert_eq!(detector.sample(12.0, 16.0, 0.5), Some(ActionEvent::ShakeDetected));
    }

    #[test]
    fn test_uses_all_three_axes() {
        let detector = ShakeDetector::new(10.0);
        assert_eq!(detector.sample(6.0, 6.0, 6.0), Some(ActionEvent::ShakeDetected));
        assert_eq!(detector.sample(-6.0, -6.0, -6.0), Some(ActionEvent::ShakeDetected));
        assert_eq!(detector.sample(5.0, 5.0, 5.0), None);
    }
}
