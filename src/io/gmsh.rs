//! Gmsh `.msh` reader and writer for 2D hybrid meshes.
//!
//! # Supported format
//! - ASCII `.msh` version **2.2**.
//! - Element types: 1 and 8 (2- and 3-node boundary edges), 2 (triangle),
//!   9 (6-node triangle), 3 (quad), 16 (8-node quad), 10 (9-node quad).
//!   Type 15 (point) is skipped.
//!
//! # Limitations
//! - Binary files are not supported.
//! - `.msh` v4.x (block-based) is not supported.
//! - The `z` coordinate is read and discarded.
//!
//! Node ids may be sparse and in any order; they are renumbered to
//! `0..num_nodes` in file order. Element tags become region tags, edge tags
//! become boundary record tags.

use std::io::{BufRead, BufReader, Read, Write};

use hashbrown::HashMap;

use crate::io::{MeshReader, MeshWriter};
use crate::mesh_error::MeshError;
use crate::topology::cell_type::ElementShape;
use crate::topology::element::{BoundaryFaceRecord, Element, PointIdx, RawMesh};
use crate::topology::options::UnknownShapePolicy;

const LINE2: u32 = 1;
const LINE3: u32 = 8;
const POINT: u32 = 15;

fn parse_err(message: impl Into<String>) -> MeshError {
    MeshError::MeshIoParse(message.into())
}

fn parse_field<T: std::str::FromStr>(raw: Option<&str>, what: &str) -> Result<T, MeshError> {
    let raw = raw.ok_or_else(|| parse_err(format!("missing {what}")))?;
    raw.parse::<T>()
        .map_err(|_| parse_err(format!("invalid {what}: {raw}")))
}

/// Gmsh `.msh` reader for ASCII v2.2 meshes.
#[derive(Debug, Default, Clone)]
pub struct GmshReader {
    pub unknown_shapes: UnknownShapePolicy,
}

impl GmshReader {
    pub fn new(unknown_shapes: UnknownShapePolicy) -> Self {
        Self { unknown_shapes }
    }

    fn check_format(line: &str) -> Result<(), MeshError> {
        let mut parts = line.split_whitespace();
        let version = parts
            .next()
            .ok_or_else(|| parse_err("missing mesh format version"))?;
        let file_type = parts
            .next()
            .ok_or_else(|| parse_err("missing mesh format type"))?;
        if file_type != "0" {
            return Err(parse_err("binary .msh files are not supported"));
        }
        if version != "2.2" {
            return Err(parse_err(format!("unsupported gmsh version: {version}")));
        }
        Ok(())
    }

    /// Shape for an element type code, after the unknown-shape policy.
    fn element_shape(&self, code: u32, line: usize) -> Result<ElementShape, MeshError> {
        if let Some(shape) = ElementShape::from_gmsh_type(code) {
            return Ok(shape);
        }
        match self.unknown_shapes {
            UnknownShapePolicy::Reject => Err(MeshError::UnsupportedElementType(code)),
            UnknownShapePolicy::TreatAsLinearTriangle => {
                log::warn!("element type {code} on line {line} read as a 3-node triangle");
                Ok(ElementShape::Triangle3)
            }
        }
    }
}

/// Line cursor that tracks line numbers for error messages.
struct Cursor<I> {
    lines: I,
    line_no: usize,
}

impl<I: Iterator<Item = std::io::Result<String>>> Cursor<I> {
    fn next_line(&mut self, what: &str) -> Result<String, MeshError> {
        self.line_no += 1;
        match self.lines.next() {
            Some(line) => Ok(line?),
            None => Err(parse_err(format!("unexpected end of file: missing {what}"))),
        }
    }

    fn expect_end(&mut self, marker: &str) -> Result<(), MeshError> {
        let line = self.next_line(marker)?;
        if line.trim() != marker {
            return Err(parse_err(format!(
                "line {}: expected {marker}, found {:?}",
                self.line_no,
                line.trim()
            )));
        }
        Ok(())
    }
}

impl MeshReader for GmshReader {
    fn read<R: Read>(&self, reader: R) -> Result<RawMesh, MeshError> {
        let mut cur = Cursor {
            lines: BufReader::new(reader).lines(),
            line_no: 0,
        };

        let mut seen_format = false;
        let mut node_index: HashMap<u64, PointIdx> = HashMap::new();
        let mut coords: Vec<[f64; 2]> = Vec::new();
        let mut elements = Vec::new();
        let mut region_tags: Vec<Vec<i32>> = Vec::new();
        let mut boundary_faces = Vec::new();
        // element rows keep gmsh node ids until the node table is complete
        let mut pending: Vec<(usize, u32, Vec<i32>, Vec<u64>)> = Vec::new();

        while let Some(line) = cur.lines.next() {
            let line = line?;
            cur.line_no += 1;
            match line.trim() {
                "$MeshFormat" => {
                    let format_line = cur.next_line("MeshFormat")?;
                    Self::check_format(&format_line)?;
                    cur.expect_end("$EndMeshFormat")?;
                    seen_format = true;
                }
                "$Nodes" => {
                    let count: usize = parse_field(Some(cur.next_line("node count")?.trim()), "node count")?;
                    coords.reserve(count);
                    for _ in 0..count {
                        let node_line = cur.next_line("node")?;
                        let mut parts = node_line.split_whitespace();
                        let id: u64 = parse_field(parts.next(), "node id")?;
                        let x: f64 = parse_field(parts.next(), "x coordinate")?;
                        let y: f64 = parse_field(parts.next(), "y coordinate")?;
                        let _z: f64 = parse_field(parts.next(), "z coordinate")?;
                        if node_index.insert(id, coords.len()).is_some() {
                            return Err(parse_err(format!("duplicate node id {id}")));
                        }
                        coords.push([x, y]);
                    }
                    cur.expect_end("$EndNodes")?;
                }
                "$Elements" => {
                    let count: usize =
                        parse_field(Some(cur.next_line("element count")?.trim()), "element count")?;
                    for _ in 0..count {
                        let elem_line = cur.next_line("element")?;
                        let line_no = cur.line_no;
                        let mut parts = elem_line.split_whitespace();
                        let _id: u64 = parse_field(parts.next(), "element id")?;
                        let code: u32 = parse_field(parts.next(), "element type")?;
                        let num_tags: usize = parse_field(parts.next(), "element tag count")?;
                        let tags = (0..num_tags)
                            .map(|_| parse_field::<i32>(parts.next(), "element tag"))
                            .collect::<Result<Vec<_>, _>>()?;
                        let ids = parts
                            .map(|raw| parse_field::<u64>(Some(raw), "element node id"))
                            .collect::<Result<Vec<_>, _>>()?;
                        pending.push((line_no, code, tags, ids));
                    }
                    cur.expect_end("$EndElements")?;
                }
                _ => {
                    // ignore other sections
                }
            }
        }
        if !seen_format {
            return Err(parse_err("missing $MeshFormat section"));
        }

        let lookup = |line: usize, ids: &[u64]| -> Result<Vec<PointIdx>, MeshError> {
            ids.iter()
                .map(|id| {
                    node_index
                        .get(id)
                        .copied()
                        .ok_or_else(|| parse_err(format!("line {line}: unknown node id {id}")))
                })
                .collect()
        };
        let mut skipped_points = 0;
        for (line, code, tags, ids) in pending {
            match code {
                POINT => skipped_points += 1,
                LINE2 | LINE3 => {
                    let n = if code == LINE2 { 2 } else { 3 };
                    if ids.len() != n {
                        return Err(parse_err(format!(
                            "line {line}: edge of type {code} needs {n} nodes, found {}",
                            ids.len()
                        )));
                    }
                    boundary_faces.push(BoundaryFaceRecord::new(lookup(line, &ids)?, tags));
                }
                _ => {
                    let shape = self.element_shape(code, line)?;
                    let n = shape.num_nodes();
                    // only the linear-triangle fallback may drop trailing ids
                    let fallback = ElementShape::from_gmsh_type(code).is_none();
                    if ids.len() < n || (!fallback && ids.len() != n) {
                        return Err(parse_err(format!(
                            "line {line}: element of type {code} needs {n} nodes, found {}",
                            ids.len()
                        )));
                    }
                    elements.push(Element::new(shape, lookup(line, &ids[..n])?)?);
                    region_tags.push(tags);
                }
            }
        }
        if skipped_points > 0 {
            log::debug!("gmsh: skipped {skipped_points} point entities");
        }
        if region_tags.iter().all(Vec::is_empty) {
            region_tags.clear();
        }
        log::info!(
            "gmsh: read {} nodes, {} elements, {} boundary edges",
            coords.len(),
            elements.len(),
            boundary_faces.len()
        );

        Ok(RawMesh {
            coords,
            elements,
            boundary_faces,
            region_tags,
        })
    }
}

/// Gmsh `.msh` writer for ASCII v2.2 meshes. Boundary edges are written
/// first, then elements; node ids are `index + 1`.
#[derive(Debug, Default, Clone)]
pub struct GmshWriter;

fn write_entity<W: Write>(
    w: &mut W,
    id: usize,
    code: u32,
    tags: &[i32],
    nodes: &[PointIdx],
) -> Result<(), MeshError> {
    write!(w, "{id} {code} {}", tags.len())?;
    for t in tags {
        write!(w, " {t}")?;
    }
    for &p in nodes {
        write!(w, " {}", p + 1)?;
    }
    writeln!(w)?;
    Ok(())
}

impl MeshWriter for GmshWriter {
    fn write<W: Write>(&self, mut writer: W, mesh: &RawMesh) -> Result<(), MeshError> {
        let w = &mut writer;
        writeln!(w, "$MeshFormat")?;
        writeln!(w, "2.2 0 8")?;
        writeln!(w, "$EndMeshFormat")?;

        writeln!(w, "$Nodes")?;
        writeln!(w, "{}", mesh.num_points())?;
        for (i, [x, y]) in mesh.coords.iter().enumerate() {
            writeln!(w, "{} {x} {y} 0", i + 1)?;
        }
        writeln!(w, "$EndNodes")?;

        writeln!(w, "$Elements")?;
        writeln!(w, "{}", mesh.num_boundary_records() + mesh.num_elements())?;
        let mut id = 1;
        for (ir, rec) in mesh.boundary_faces.iter().enumerate() {
            let code = match rec.nodes().len() {
                2 => LINE2,
                3 => LINE3,
                n => {
                    return Err(parse_err(format!(
                        "boundary record {ir} has {n} nodes; gmsh edges have 2 or 3"
                    )));
                }
            };
            write_entity(w, id, code, rec.tags(), rec.nodes())?;
            id += 1;
        }
        for (ie, elem) in mesh.elements.iter().enumerate() {
            let tags = mesh.region_tags.get(ie).map_or(&[][..], Vec::as_slice);
            write_entity(w, id, elem.shape().gmsh_type(), tags, elem.nodes())?;
            id += 1;
        }
        writeln!(w, "$EndElements")?;
        w.flush()?;
        log::debug!(
            "gmsh: wrote {} nodes, {} entities",
            mesh.num_points(),
            id - 1
        );
        Ok(())
    }
}
