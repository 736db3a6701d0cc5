use std::fmt;

/// A Wavefront MTL material block.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub ns: f32,
    pub ka: [f32; 3],
    pub kd: [f32; 3],
    pub ks: [f32; 3],
    pub ke: [f32; 3],
    pub ni: f32,
    pub dissolve: f32,
    pub illum: i32,
}

impl Material {
    /// Name of the material assigned to the group at `index`.
    pub fn name_for(index: usize) -> String {
        return format!("Material.{}", index);
    }

    /// Plain grey material. Every group gets the same properties; only the name differs.
    pub fn stub(index: usize) -> Self {
        return Material {
            name: Material::name_for(index),
            ns: 225.0,
            ka: [1.0, 1.0, 1.0],
            kd: [0.8, 0.8, 0.8],
            ks: [0.5, 0.5, 0.5],
            ke: [0.0, 0.0, 0.0],
            ni: 1.45,
            dissolve: 1.0,
            illum: 2,
        };
    }

    /// The block as MTL lines, `newmtl` first.
    pub fn lines(&self) -> Vec<String> {
        let color = |c: &[f32; 3]| format!("{:.6} {:.6} {:.6}", c[0], c[1], c[2]);

        return vec![
            format!("newmtl {}", self.name),
            format!("Ns {:.6}", self.ns),
            format!("Ka {}", color(&self.ka)),
            format!("Kd {}", color(&self.kd)),
            format!("Ks {}", color(&self.ks)),
            format!("Ke {}", color(&self.ke)),
            format!("Ni {:.6}", self.ni),
            format!("d {:.6}", self.dissolve),
            format!("illum {}", self.illum),
        ];
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_block() {
        let expected = "\
newmtl Material.3
Ns 225.000000
Ka 1.000000 1.000000 1.000000
Kd 0.800000 0.800000 0.800000
Ks 0.500000 0.500000 0.500000
Ke 0.000000 0.000000 0.000000
Ni 1.450000
d 1.000000
illum 2
";

        assert_eq!(Material::stub(3).to_string(), expected);
    }

    #[test]
    fn stubs_differ_only_by_name() {
        let mut a = Material::stub(0);
        let b = Material::stub(7);

        assert_ne!(a, b);
        a.name = b.name.clone();
        assert_eq!(a, b);
    }
}
