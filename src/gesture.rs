//! Swipe-versus-tap classification for press/release coordinate pairs.

/// What a press/release pair amounts to.
///
/// A recognized swipe suppresses the underlying tap; the two are mutually
/// exclusive outcomes of one classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Horizontal swipe toward negative x. Advances to the next mode.
    SwipeLeft,
    /// Horizontal swipe toward positive x. Retreats to the previous mode.
    SwipeRight,
    /// Anything that is not a swipe.
    Tap,
}

/// Classify a press/release pair in one call.
///
/// `dx` and `dy` are release minus press, in device-independent pixels.
/// A swipe needs `|dx| >= threshold` and `|dy| <= vertical_tolerance`;
/// its direction follows the sign of `dx`. Everything else is a tap.
pub fn classify(
    press: (f64, f64),
    release: (f64, f64),
    threshold: f64,
    vertical_tolerance: f64,
) -> Gesture {
    let dx = release.0 - press.0;
    let dy = release.1 - press.1;
    if dx.abs() >= threshold && dy.abs() <= vertical_tolerance {
        if dx < 0.0 {
            Gesture::SwipeLeft
        } else {
            Gesture::SwipeRight
        }
    } else {
        Gesture::Tap
    }
}
