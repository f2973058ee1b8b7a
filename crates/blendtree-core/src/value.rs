//! Variant: typed parameter slots exchanged between the host and the graph.

use serde::{Deserialize, Serialize};

/// Coarse tag for a [`Variant`], useful for pattern-matching and diagnostics.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VariantKind {
    Bool,
    Int,
    Float,
    Vec3,
    Quat,
    Mat4,
}

impl VariantKind {
    pub fn name(self) -> &'static str {
        match self {
            VariantKind::Bool => "bool",
            VariantKind::Int => "int",
            VariantKind::Float => "float",
            VariantKind::Vec3 => "vec3",
            VariantKind::Quat => "quat",
            VariantKind::Mat4 => "mat4",
        }
    }
}

/// Immutable-once-constructed tagged value. Exactly one alternative is
/// active; the typed getters must only be called on a matching tag.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum Variant {
    Bool(bool),
    Int(i64),
    Float(f64),
    Vec3([f64; 3]),
    /// Quaternion (x, y, z, w)
    Quat([f64; 4]),
    /// Column-major 4x4 matrix
    Mat4([[f64; 4]; 4]),
}

impl Default for Variant {
    fn default() -> Self {
        Variant::Bool(false)
    }
}

impl Variant {
    /// Return the coarse kind of this value.
    #[inline]
    pub fn kind(&self) -> VariantKind {
        match self {
            Variant::Bool(_) => VariantKind::Bool,
            Variant::Int(_) => VariantKind::Int,
            Variant::Float(_) => VariantKind::Float,
            Variant::Vec3(_) => VariantKind::Vec3,
            Variant::Quat(_) => VariantKind::Quat,
            Variant::Mat4(_) => VariantKind::Mat4,
        }
    }

    #[inline]
    pub fn is_bool(&self) -> bool {
        matches!(self, Variant::Bool(_))
    }

    #[inline]
    pub fn is_int(&self) -> bool {
        matches!(self, Variant::Int(_))
    }

    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, Variant::Float(_))
    }

    #[inline]
    pub fn is_vec3(&self) -> bool {
        matches!(self, Variant::Vec3(_))
    }

    #[inline]
    pub fn is_quat(&self) -> bool {
        matches!(self, Variant::Quat(_))
    }

    #[inline]
    pub fn is_mat4(&self) -> bool {
        matches!(self, Variant::Mat4(_))
    }

    /// Typed getters. Calling one against the wrong tag is a programmer
    /// error: debug builds assert, release builds return the type's zero.
    pub fn bool_value(&self) -> bool {
        debug_assert!(self.is_bool(), "bool_value on {}", self.kind().name());
        match self {
            Variant::Bool(b) => *b,
            _ => false,
        }
    }

    pub fn int_value(&self) -> i64 {
        debug_assert!(self.is_int(), "int_value on {}", self.kind().name());
        match self {
            Variant::Int(i) => *i,
            _ => 0,
        }
    }

    pub fn float_value(&self) -> f64 {
        debug_assert!(self.is_float(), "float_value on {}", self.kind().name());
        match self {
            Variant::Float(f) => *f,
            _ => 0.0,
        }
    }

    pub fn vec3(&self) -> [f64; 3] {
        debug_assert!(self.is_vec3(), "vec3 on {}", self.kind().name());
        match self {
            Variant::Vec3(v) => *v,
            _ => [0.0; 3],
        }
    }

    pub fn quat(&self) -> [f64; 4] {
        debug_assert!(self.is_quat(), "quat on {}", self.kind().name());
        match self {
            Variant::Quat(q) => *q,
            _ => [0.0; 4],
        }
    }

    pub fn mat4(&self) -> [[f64; 4]; 4] {
        debug_assert!(self.is_mat4(), "mat4 on {}", self.kind().name());
        match self {
            Variant::Mat4(m) => *m,
            _ => [[0.0; 4]; 4],
        }
    }

    /// Numeric view: ints promote to float, everything else is non-numeric.
    #[inline]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Variant::Int(i) => Some(*i as f64),
            Variant::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Native truthiness: false/zero is falsy, aggregates are always truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        match self {
            Variant::Bool(b) => *b,
            Variant::Int(i) => *i != 0,
            Variant::Float(f) => *f != 0.0,
            Variant::Vec3(_) | Variant::Quat(_) | Variant::Mat4(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_false_bool() {
        let v = Variant::default();
        assert!(v.is_bool());
        assert!(!v.bool_value());
    }

    #[test]
    fn tag_and_getter_round_trip() {
        let m = [
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, -7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ];
        let cases = vec![
            Variant::Bool(true),
            Variant::Int(-1),
            Variant::Float(-1.0),
            Variant::Vec3([1.0, -2.0, 3.0]),
            Variant::Quat([2.0, -3.0, 4.0, 1.0]),
            Variant::Mat4(m),
        ];
        for v in &cases {
            // exactly one predicate holds per value
            let tags = [
                v.is_bool(),
                v.is_int(),
                v.is_float(),
                v.is_vec3(),
                v.is_quat(),
                v.is_mat4(),
            ];
            assert_eq!(tags.iter().filter(|t| **t).count(), 1, "{:?}", v);
        }
        assert!(Variant::Bool(true).bool_value());
        assert_eq!(Variant::Int(-1).int_value(), -1);
        assert_eq!(Variant::Float(-1.0).float_value(), -1.0);
        assert_eq!(Variant::Vec3([1.0, -2.0, 3.0]).vec3(), [1.0, -2.0, 3.0]);
        assert_eq!(
            Variant::Quat([2.0, -3.0, 4.0, 1.0]).quat(),
            [2.0, -3.0, 4.0, 1.0]
        );
        let got = Variant::Mat4(m).mat4();
        assert_eq!(got[0][0], 1.0);
        assert_eq!(got[1][2], -7.0);
        assert_eq!(got[3][3], 16.0);
    }

    #[test]
    fn truthiness() {
        assert!(!Variant::Bool(false).is_truthy());
        assert!(!Variant::Int(0).is_truthy());
        assert!(!Variant::Float(0.0).is_truthy());
        assert!(Variant::Int(-1).is_truthy());
        assert!(Variant::Float(0.5).is_truthy());
        assert!(Variant::Vec3([0.0; 3]).is_truthy());
    }

    #[test]
    fn numeric_view_promotes_ints() {
        assert_eq!(Variant::Int(3).as_float(), Some(3.0));
        assert_eq!(Variant::Float(1.5).as_float(), Some(1.5));
        assert_eq!(Variant::Bool(true).as_float(), None);
    }
}
