use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::objects::lexer::Lexer;
use crate::objects::Polygon;

const FACE_MARKER: &str = "f ";

/// Polygons of an OBJ file plus the lines that precede its first `usemtl`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    /// Vertex, uv and normal definitions (and anything else) copied verbatim.
    pub header: Vec<String>,
    pub polygons: Vec<Polygon>,
}

/// Parses a face line into its vertices; `None` if the line is not a face line.
pub fn parse_face_line(line: &str) -> Option<Polygon> {
    let body = line.strip_prefix(FACE_MARKER)?;
    let mut lexer = Lexer::new(body);
    let mut polygon = Polygon::new();

    while !lexer.is_exhausted() {
        match lexer.next_vertex() {
            Some(vertex) => polygon.push(vertex),
            None => {
                debug!(
                    "Face line truncated at column {}: {:?}",
                    lexer.column() + FACE_MARKER.len(),
                    line
                );
                break;
            }
        }
    }

    return Some(polygon);
}

fn is_header_line(line: &str) -> bool {
    return !line.starts_with('#') && !line.starts_with("mtllib");
}

impl Object {
    pub fn new() -> Self {
        return Object {
            header: Vec::new(),
            polygons: Vec::new(),
        };
    }

    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Object> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::read(path, e))?;

        let object = Object::from_reader(BufReader::new(file)).map_err(|e| Error::read(path, e))?;

        if object.polygons.is_empty() {
            return Err(Error::EmptyOrUnparsable {
                path: path.to_path_buf(),
            });
        }

        debug!(
            "Parsed {}: {} header lines, {} polygons",
            path.display(),
            object.header.len(),
            object.polygons.len()
        );

        return Ok(object);
    }

    /// Reads every line of `reader`. An object without polygons is returned as is.
    pub fn from_reader<R: BufRead>(mut reader: R) -> std::io::Result<Object> {
        let mut object = Object::new();
        let mut in_header = true;
        let mut bytes = Vec::new();
        let mut empty_faces = 0usize;

        loop {
            bytes.clear();
            if reader.read_until(b'\n', &mut bytes)? == 0 {
                break;
            }

            let raw = String::from_utf8_lossy(&bytes);
            // header lines keep a trailing `\r`, faces are read without it
            let line = raw.trim_end_matches('\n');

            if let Some(polygon) = parse_face_line(line.trim_end_matches('\r')) {
                if polygon.is_empty() {
                    empty_faces += 1;
                }
                object.polygons.push(polygon);
            }

            if in_header && is_header_line(line) {
                if line.starts_with("usemtl") {
                    in_header = false;
                } else {
                    object.header.push(line.to_string());
                }
            }
        }

        if empty_faces > 0 {
            warn!(
                "{} face lines had no readable pos/uv/normal vertex, kept as empty polygons",
                empty_faces
            );
        }

        return Ok(object);
    }

    pub fn polygon_count(&self) -> usize {
        return self.polygons.len();
    }
}

impl std::str::FromStr for Object {
    type Err = std::io::Error;

    fn from_str(s: &str) -> std::io::Result<Object> {
        Object::from_reader(s.as_bytes())
    }
}
