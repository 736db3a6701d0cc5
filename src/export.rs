use std::ffi::OsString;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{Error, Result};
use crate::groups::{DivisionMode, Group};
use crate::materials::Material;
use crate::objects::{Object, Polygon};

pub const OBJ_BANNER: &str = "# SED Auto Materials v1.0 OBJ File";
pub const MTL_BANNER: &str = "# SED Auto Materials v1.0 MTL File";

/// Renders a polygon back to an OBJ face line.
pub fn face_line(polygon: &Polygon) -> String {
    let mut line = String::from("f");
    for vertex in polygon {
        line.push(' ');
        line.push_str(&vertex.to_string());
    }
    return line;
}

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut path = OsString::from(base.as_os_str());
    path.push(suffix);
    return PathBuf::from(path);
}

/// Files written by [`Export::write`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub obj: PathBuf,
    pub mtl: PathBuf,
}

impl ExportPaths {
    /// `<base>.obj` and `<base>.mtl`; `base` may point into another directory.
    pub fn from_base<P: AsRef<Path>>(base: P) -> Self {
        let base = base.as_ref();
        return ExportPaths {
            obj: with_suffix(base, ".obj"),
            mtl: with_suffix(base, ".mtl"),
        };
    }

    /// What the `mtllib` directive refers to: the material file next to the OBJ.
    pub fn mtl_name(&self) -> String {
        return self
            .mtl
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output.mtl".to_string());
    }
}

/// Regenerated OBJ and MTL text for one division of an object.
pub struct Export<'a> {
    object: &'a Object,
    groups: &'a [Group],
}

impl<'a> Export<'a> {
    pub fn new(object: &'a Object, groups: &'a [Group]) -> Self {
        return Export { object, groups };
    }

    pub fn obj_lines(&self, mtl_name: &str) -> Vec<String> {
        let mut lines = vec![OBJ_BANNER.to_string(), format!("mtllib {}", mtl_name)];
        lines.extend(self.object.header.iter().cloned());

        for (index, group) in self.groups.iter().enumerate() {
            lines.push(format!("usemtl {}", Material::name_for(index)));
            lines.push("s off".to_string());

            for &p in &group.polygons {
                lines.push(face_line(&self.object.polygons[p]));
            }
        }

        return lines;
    }

    pub fn mtl_lines(&self) -> Vec<String> {
        let mut lines = vec![
            MTL_BANNER.to_string(),
            format!("# Material Count: {}", self.groups.len()),
        ];

        for index in 0..self.groups.len() {
            lines.push(String::new());
            lines.extend(Material::stub(index).lines());
        }

        return lines;
    }

    /// Writes `<base>.obj` and `<base>.mtl`, replacing existing files.
    ///
    /// Both files are staged next to their targets and only moved into place
    /// once both are complete; on error neither target is created.
    pub fn write<P: AsRef<Path>>(&self, base: P) -> Result<ExportPaths> {
        let paths = ExportPaths::from_base(base);

        let obj = stage_lines(&paths.obj, &self.obj_lines(&paths.mtl_name()))?;
        let mtl = stage_lines(&paths.mtl, &self.mtl_lines())?;

        mtl.persist(&paths.mtl).map_err(|e| Error::write(&paths.mtl, e.error))?;

        if let Err(e) = obj.persist(&paths.obj) {
            let _ = fs::remove_file(&paths.mtl);
            return Err(Error::write(&paths.obj, e.error));
        }

        info!(
            "Wrote {} materials to {} and {}",
            self.groups.len(),
            paths.obj.display(),
            paths.mtl.display()
        );

        return Ok(paths);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub polygons: usize,
    pub groups: usize,
    pub paths: ExportPaths,
}

/// Batch path: parse `input`, divide it with `mode`, write `<output_base>.obj`/`.mtl`.
pub fn convert<P, Q>(input: P, output_base: Q, mode: DivisionMode) -> Result<Conversion>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let object = Object::parse(input)?;
    let groups = mode.divide(&object.polygons);
    let paths = Export::new(&object, &groups).write(output_base)?;

    return Ok(Conversion {
        polygons: object.polygon_count(),
        groups: groups.len(),
        paths,
    });
}

/// Writes `lines` to a temporary file in the directory of `path`.
fn stage_lines(path: &Path, lines: &[String]) -> Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let stage = || -> io::Result<NamedTempFile> {
        let mut file = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(file.as_file_mut());
            for line in lines {
                writeln!(writer, "{}", line)?;
            }
            writer.flush()?;
        }

        // NamedTempFile creates files as 0600
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.as_file().set_permissions(fs::Permissions::from_mode(0o644))?;
        }

        Ok(file)
    };

    stage().map_err(|e| Error::write(path, e))
}
