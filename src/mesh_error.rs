//! MeshError: Unified error type for hybrid-mesh public APIs
//!
//! Every structural problem found while building the topology is reported
//! through this enum with enough context (element, local face, record or face
//! index) to locate the offending mesh entity. None of these errors are
//! transient; there is no partial-success mode.

use thiserror::Error;

use crate::topology::cell_type::ElementShape;

/// Unified error type for mesh topology construction and mesh I/O.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// A face of `element` is shared by more than one other element.
    #[error(
        "Malformed topology: face {local_face} of element {element} is shared by several elements {candidates:?}"
    )]
    MalformedTopology {
        element: usize,
        local_face: usize,
        candidates: Vec<usize>,
    },
    /// The neighbor found across a face does not see that face back.
    #[error(
        "Malformed topology: element {neighbor} does not match face {local_face} of element {element}"
    )]
    InconsistentNeighbor {
        element: usize,
        local_face: usize,
        neighbor: usize,
    },
    /// A raw boundary record lies on more than one element.
    #[error("Malformed topology: boundary record {record} is owned by several elements {candidates:?}")]
    AmbiguousBoundaryOwner { record: usize, candidates: Vec<usize> },
    /// A raw boundary record whose vertices no element shares.
    #[error("Malformed topology: boundary record {record} has no owning element")]
    OrphanBoundaryFace { record: usize },
    /// The owning element has no local face made of the record's vertices.
    #[error("Malformed topology: boundary record {record} is not a face of element {element}")]
    BoundaryFaceNotInElement { record: usize, element: usize },
    /// No canonical boundary face matches a raw boundary record.
    #[error("Boundary record {record} matches no canonical boundary face")]
    UnmatchedBoundaryFace { record: usize },
    /// A canonical boundary face is not covered by any raw boundary record.
    #[error("Canonical boundary face {face} has no boundary record")]
    MissingBoundaryRecord { face: usize },
    /// Two raw boundary records describe the same canonical face.
    #[error("Boundary record {record} duplicates canonical boundary face {face}")]
    DuplicateBoundaryRecord { record: usize, face: usize },
    /// No supported shape has this many nodes.
    #[error("Unsupported element shape: no shape has {nodes} nodes")]
    UnsupportedShape { nodes: usize },
    /// Gmsh element type code with no supported 2D shape.
    #[error("Unsupported element type code {0}")]
    UnsupportedElementType(u32),
    /// Connectivity length differs from the requested shape's node count.
    #[error("{shape} takes {expected} nodes, found {found}")]
    ShapeNodeCount {
        shape: ElementShape,
        expected: usize,
        found: usize,
    },
    /// Element `element` of a mesh has the wrong node count for its shape.
    #[error("Element {element}: expected {expected} nodes, found {found}")]
    NodeCountMismatch {
        element: usize,
        expected: usize,
        found: usize,
    },
    /// A node index outside `0..num_points`.
    #[error("{entity} references point {point}, but the mesh has {num_points} points")]
    VertexOutOfRange {
        entity: String,
        point: usize,
        num_points: usize,
    },
    /// An element repeats one of its vertices.
    #[error("Element {element} is degenerate: vertex {point} appears more than once")]
    DegenerateElement { element: usize, point: usize },
    /// A boundary record with fewer than two nodes, or two equal vertices.
    #[error("Boundary record {record} needs two distinct low-order vertices")]
    BoundaryRecordTooShort { record: usize },
    /// Boundary tag vectors must all have the same width.
    #[error("Boundary record {record} has {found} tags, expected {expected}")]
    TagWidthMismatch {
        record: usize,
        expected: usize,
        found: usize,
    },
    /// Invalid generator input (zero cell counts, inverted bounds).
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
    /// A post-construction invariant check failed.
    #[error("Topology invariant violated: {0}")]
    InvariantViolation(String),
    /// Malformed mesh file contents.
    #[error("Mesh I/O parse error: {0}")]
    MeshIoParse(String),
    /// Underlying I/O failure.
    #[error("Mesh I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for MeshError {
    fn from(err: std::io::Error) -> Self {
        MeshError::Io(err.to_string())
    }
}
