/// Wavefront OBJ parser
///
/// Reads the `v`/`vt`/`vn`/`f` record types line by line into parallel
/// sequences. All other record types (comments, `o`, `g`, `s`, `mtllib`, ...)
/// are skipped, as are lines with too few tokens for their tag.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use nalgebra::{Point3, Vector2, Vector3};
use tracing::debug;

use crate::error::{Error, Result};

/// Raw records extracted from an OBJ file.
///
/// Face indices are stored 0-based (the file is 1-based); faces produced
/// by the parser always carry at least three indices, and downstream
/// consumers rely on that. Texture coordinates are parsed so the record
/// count is available, but nothing downstream consumes them yet.
#[derive(Debug, Clone, Default)]
pub struct ObjData {
    pub positions: Vec<Point3<f32>>,
    pub tex_coords: Vec<Vector2<f32>>,
    pub normals: Vec<Vector3<f32>>,
    pub faces: Vec<Vec<usize>>,
}

impl ObjData {
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
            && self.tex_coords.is_empty()
            && self.normals.is_empty()
            && self.faces.is_empty()
    }
}

/// Load an OBJ file from disk.
///
/// The file handle is scoped to this call and closed on every exit path.
/// An unopenable path yields `Error::FileOpen` with nothing populated.
pub fn load_obj(path: impl AsRef<Path>) -> Result<ObjData> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let data = parse_obj(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        positions = data.positions.len(),
        normals = data.normals.len(),
        faces = data.faces.len(),
        "loaded OBJ file"
    );
    Ok(data)
}

/// Parse OBJ records from a buffered reader.
///
/// A malformed numeric token under a recognized tag aborts the whole parse;
/// there is no per-line recovery and no partial model.
pub fn parse_obj(reader: impl BufRead) -> Result<ObjData> {
    let mut data = ObjData::default();

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = line_number + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let Some((&tag, args)) = tokens.split_first() else {
            continue; // blank line
        };

        match tag {
            "v" if args.len() >= 3 => {
                // Extra tokens past the third are ignored
                let x = parse_float(args[0], line_number)?;
                let y = parse_float(args[1], line_number)?;
                let z = parse_float(args[2], line_number)?;
                data.positions.push(Point3::new(x, y, z));
            }
            "vt" if args.len() >= 2 => {
                let u = parse_float(args[0], line_number)?;
                let v = parse_float(args[1], line_number)?;
                data.tex_coords.push(Vector2::new(u, v));
            }
            "vn" if args.len() >= 3 => {
                let x = parse_float(args[0], line_number)?;
                let y = parse_float(args[1], line_number)?;
                let z = parse_float(args[2], line_number)?;
                data.normals.push(Vector3::new(x, y, z));
            }
            // A face needs at least 3 vertex indices to form a triangle;
            // shorter `f` lines are skipped like any other ignorable line
            "f" if args.len() >= 3 => {
                let mut face = Vec::with_capacity(args.len());
                for token in args {
                    face.push(parse_face_index(token, line_number)?);
                }
                data.faces.push(face);
            }
            // Unknown tag or too few tokens for a known tag
            _ => {}
        }
    }

    Ok(data)
}

fn parse_float(token: &str, line: usize) -> Result<f32> {
    token
        .parse::<f32>()
        .map_err(|_| Error::InvalidNumericLiteral {
            line,
            token: token.to_string(),
        })
}

/// Parse one face token to a 0-based vertex index.
///
/// `f` arguments may carry texture/normal references (`v`, `v/vt`,
/// `v//vn`, `v/vt/vn`); only the leading vertex index is consumed. OBJ
/// indices are 1-based, so 0 is not a legal index token.
fn parse_face_index(token: &str, line: usize) -> Result<usize> {
    let vertex_ref = token.split('/').next().unwrap_or(token);
    vertex_ref
        .parse::<usize>()
        .ok()
        .and_then(|i| i.checked_sub(1))
        .ok_or_else(|| Error::InvalidNumericLiteral {
            line,
            token: token.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(src: &str) -> ObjData {
        parse_obj(Cursor::new(src)).unwrap()
    }

    #[test]
    fn test_empty_input_yields_empty_data() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_parse_positions_exact() {
        let data = parse("v 0.5 -1.25 3.0\n");
        assert_eq!(data.positions.len(), 1);
        assert_eq!(data.positions[0], Point3::new(0.5, -1.25, 3.0));
    }

    #[test]
    fn test_face_indices_are_decremented() {
        let data = parse("f 1 2 3\n");
        assert_eq!(data.faces, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_face_with_slash_references() {
        let data = parse("f 1/1/1 2/2/2 3/3/3\nf 4//4 5//5 6//6\n");
        assert_eq!(data.faces[0], vec![0, 1, 2]);
        assert_eq!(data.faces[1], vec![3, 4, 5]);
    }

    #[test]
    fn test_polygon_face_keeps_all_indices() {
        let data = parse("f 1 2 3 4\n");
        assert_eq!(data.faces[0], vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_short_face_line_is_ignored() {
        // `f 1 2` cannot form a triangle
        let data = parse("f 1 2\n");
        assert!(data.faces.is_empty());
    }

    #[test]
    fn test_unknown_tags_and_comments_are_ignored() {
        let src = "# comment\no bunny\ng body\ns 1\nmtllib bunny.mtl\nv 1 2 3\n";
        let data = parse(src);
        assert_eq!(data.positions.len(), 1);
        assert!(data.faces.is_empty());
    }

    #[test]
    fn test_blank_lines_and_extra_whitespace() {
        let data = parse("\n\t \nv  1.0\t2.0   3.0 \n");
        assert_eq!(data.positions[0], Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_extra_position_tokens_are_ignored() {
        let data = parse("v 1 2 3 1.0\n");
        assert_eq!(data.positions[0], Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_texture_coordinates() {
        let data = parse("vt 0.25 0.75\n");
        assert_eq!(data.tex_coords[0], Vector2::new(0.25, 0.75));
    }

    #[test]
    fn test_parsed_normals_are_kept() {
        let data = parse("vn 0 1 0\n");
        assert_eq!(data.normals[0], Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_short_vertex_line_is_ignored() {
        let data = parse("v 1 2\n");
        assert!(data.positions.is_empty());
    }

    #[test]
    fn test_malformed_float_aborts_parse() {
        let err = parse_obj(Cursor::new("v 1.0 abc 3.0\n")).unwrap_err();
        match err {
            Error::InvalidNumericLiteral { line, token } => {
                assert_eq!(line, 1);
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_face_index_aborts_parse() {
        assert!(parse_obj(Cursor::new("f 1 x 3\n")).is_err());
        // 0 is not a legal 1-based index
        assert!(parse_obj(Cursor::new("f 0 1 2\n")).is_err());
    }

    #[test]
    fn test_missing_file_reports_file_open() {
        let err = load_obj("/nonexistent/model.obj").unwrap_err();
        assert!(matches!(err, Error::FileOpen { .. }));
    }
}
