use crate::user_interface::camera::CameraState;

/// Named on/off switches, one per toggleable layer of a visualization
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityToggles {
    names: Vec<&'static str>,
    enabled: Vec<bool>,
}

impl VisibilityToggles {
    /// All toggles start enabled
    pub fn new(names: &[&'static str]) -> Self {
        Self {
            names: names.to_vec(),
            enabled: vec![true; names.len()],
        }
    }

    /// Out of range indices are disabled
    pub fn is_enabled(&self, index: usize) -> bool {
        self.enabled.get(index).copied().unwrap_or(false)
    }

    pub fn name(&self, index: usize) -> Option<&'static str> {
        self.names.get(index).copied()
    }

    /// Flips toggle `index` and returns its new value, or `None` if there is no such toggle
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let enabled = self.enabled.get_mut(index)?;
        *enabled = !*enabled;
        Some(*enabled)
    }
}

/// Everything input can change between frames
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub camera: CameraState,
    pub toggles: VisibilityToggles,
    /// Set between a pointer press and release, while pointer motion turns the camera
    pub pointer_tracking: bool,
}

impl ViewState {
    pub fn new(camera: CameraState, toggles: VisibilityToggles) -> Self {
        Self {
            camera,
            toggles,
            pointer_tracking: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling() {
        let mut toggles = VisibilityToggles::new(&["a", "b"]);
        assert!(toggles.is_enabled(1));
        assert_eq!(toggles.toggle(1), Some(false));
        assert!(!toggles.is_enabled(1));
        assert!(toggles.is_enabled(0));
        assert_eq!(toggles.toggle(2), None);
        assert!(!toggles.is_enabled(2));
        assert_eq!(toggles.toggle(1), Some(true));
        assert_eq!(toggles.name(0), Some("a"));
    }
}
