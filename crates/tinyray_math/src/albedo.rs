use glam::Vec4;

/// Per-material weights for the four shading contributions.
///
/// The weights are not required to sum to one; bright mirrors routinely use
/// a specular weight above 1 and rely on the exposure clamp at output time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Albedo {
    /// `kd`: weight of the diffuse (Lambert) term
    pub diffuse: f32,
    /// `ks`: weight of the specular (Phong) highlight
    pub specular: f32,
    /// `kr`: weight of the recursively traced reflection
    pub reflect: f32,
    /// `kt`: weight of the recursively traced refraction
    pub refract: f32,
}

impl Albedo {
    pub const fn new(diffuse: f32, specular: f32, reflect: f32, refract: f32) -> Self {
        Self {
            diffuse,
            specular,
            reflect,
            refract,
        }
    }

    /// Whether every weight is a finite number.
    pub fn is_finite(&self) -> bool {
        self.to_vec4().is_finite()
    }

    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.diffuse, self.specular, self.reflect, self.refract)
    }
}

impl Default for Albedo {
    /// Purely diffuse.
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }
}

impl From<Vec4> for Albedo {
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<[f32; 4]> for Albedo {
    fn from([kd, ks, kr, kt]: [f32; 4]) -> Self {
        Self::new(kd, ks, kr, kt)
    }
}
