/// Errors produced by the grid-geometry recovery pipeline.
///
/// All of these are fatal for the image being processed: downstream
/// stages have hard dependencies on the geometry, so no partial results
/// are produced.
#[derive(thiserror::Error, Debug)]
pub enum GridDetectError {
    #[error("line detector returned no segments")]
    NoLinesDetected,

    #[error("no {axis} boundary positions to cluster")]
    EmptyPositions { axis: &'static str },

    #[error("only {found} grid intersections, need at least {needed}")]
    InsufficientIntersections { found: usize, needed: usize },
}
