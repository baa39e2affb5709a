use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex argument fell outside `[0, vertex_count)`.
    #[error("vertex {vertex} is not between 0 and {}", last_vertex(.vertex_count))]
    InvalidVertex { vertex: i64, vertex_count: usize },
}

fn last_vertex(vertex_count: &usize) -> i64 {
    i64::try_from(*vertex_count).map_or(i64::MAX, |n| n - 1)
}

/// Bounds-check `v` against a graph of `vertex_count` vertices.
pub fn validate_vertex(v: usize, vertex_count: usize) -> Result<usize, GraphError> {
    if v < vertex_count {
        Ok(v)
    } else {
        Err(GraphError::InvalidVertex {
            vertex: i64::try_from(v).unwrap_or(i64::MAX),
            vertex_count,
        })
    }
}

/// Same check for signed input (edge-list tokens, `--source`).
pub fn vertex_from_signed(raw: i64, vertex_count: usize) -> Result<usize, GraphError> {
    match usize::try_from(raw) {
        Ok(v) if v < vertex_count => Ok(v),
        _ => Err(GraphError::InvalidVertex {
            vertex: raw,
            vertex_count,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_vertex_accepts_in_range_and_rejects_upper_bound() {
        assert_eq!(validate_vertex(0, 3), Ok(0));
        assert_eq!(validate_vertex(2, 3), Ok(2));
        assert_eq!(
            validate_vertex(3, 3),
            Err(GraphError::InvalidVertex {
                vertex: 3,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn vertex_from_signed_rejects_negative() {
        assert_eq!(vertex_from_signed(1, 2), Ok(1));
        assert_eq!(
            vertex_from_signed(-1, 2),
            Err(GraphError::InvalidVertex {
                vertex: -1,
                vertex_count: 2
            })
        );
    }

    #[test]
    fn message_names_the_valid_range() {
        let err = validate_vertex(7, 6).unwrap_err();
        assert_eq!(err.to_string(), "vertex 7 is not between 0 and 5");

        // Empty graph: nothing is valid.
        let err = validate_vertex(0, 0).unwrap_err();
        assert_eq!(err.to_string(), "vertex 0 is not between 0 and -1");
    }
}
