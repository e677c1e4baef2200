use glam::DVec3;

// ~~ Cartesian Axis ~~

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CartesianAxis {
    X,
    Y,
    Z,
}

impl CartesianAxis {
    /// Component index into a 3d vector
    pub fn index(&self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// The coordinate of `point` along this axis
    #[inline]
    pub fn component(&self, point: DVec3) -> f64 {
        match self {
            Self::X => point.x,
            Self::Y => point.y,
            Self::Z => point.z,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        }
    }
}

impl std::fmt::Display for CartesianAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_matches_index() {
        let point = DVec3::new(1., 2., 3.);
        for axis in [CartesianAxis::X, CartesianAxis::Y, CartesianAxis::Z] {
            assert_eq!(axis.component(point), point.to_array()[axis.index()]);
        }
        assert_eq!(format!("{}", CartesianAxis::Y), "Y");
    }
}
